//! Error hierarchy shared by the Gleam crates.
//!
//! Each variant carries the detail for logs; `user_message()` gives the
//! short line shown to the user instead.

use thiserror::Error;

/// Anything that can stop a dashboard pass.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),
}

impl AppError {
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
        }
    }
}

/// Transport failures talking to the provider.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unreadable response body: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Unable to reach the weather provider. Check your internet connection."
            }
            NetworkError::Timeout => "The weather provider did not answer in time.",
            NetworkError::InvalidResponse(_) => "The weather provider sent an incomplete response.",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Cannot parse config file: {0}")]
    ParseError(String),

    #[error("Missing required setting: {0}")]
    MissingSetting(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check config.toml.",
            ConfigError::ParseError(_) => "config.toml is not valid TOML.",
            ConfigError::MissingSetting(_) => {
                "No API key. Set WEATHER_API_KEY or weather.api_key in config.toml."
            }
        }
    }
}

/// Provider answered, but not with usable weather.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The body carried an `error` block.
    #[error("Weather API error: {0}")]
    ApiError(String),

    #[error("Malformed weather response: {0}")]
    InvalidResponse(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::ApiError(_) => "Weather lookup failed. Check the location and API key.",
            WeatherError::InvalidResponse(_) => "The weather provider returned unreadable data.",
        }
    }
}

/// Classifies reqwest failures. `fetch` reads every status, so only
/// transport-level errors reach this.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() || self.is_body() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
