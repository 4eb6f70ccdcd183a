//! Forecast endpoint body, the observation extracted from it, and client errors.

use serde::{Deserialize, Serialize};

/// Body of the forecast endpoint.
///
/// The provider answers either with `location`/`current` blocks or with a
/// single `error` block; failure subtypes are not distinguished.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForecastResponse {
    Failure { error: ApiErrorBody },
    Success {
        location: ApiLocation,
        current: ApiCurrent,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiLocation {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub localtime: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCondition {
    pub text: String,
    pub code: i32,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCurrent {
    pub temp_c: f64,
    pub feelslike_c: f64,
    pub humidity: u8,
    pub uv: f64,
    pub wind_kph: f64,
    pub condition: ApiCondition,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Current conditions extracted from a successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub location_name: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity: u8,
    pub uv_index: f64,
    pub wind_kph: f64,
    pub condition_code: i32,
    pub condition_text: String,
    pub condition_icon: String,
    pub last_updated: Option<String>,
}

impl WeatherObservation {
    /// Absolute icon URL; the provider sends protocol-relative paths.
    pub fn icon_url(&self) -> Option<String> {
        let icon = self.condition_icon.trim();
        if icon.is_empty() {
            None
        } else if icon.starts_with("//") {
            Some(format!("https:{}", icon))
        } else {
            Some(icon.to_string())
        }
    }
}

impl ForecastResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, ForecastResponse::Failure { .. })
    }

    /// Convert into an observation, surfacing the provider's `error` block.
    pub fn into_observation(self) -> Result<WeatherObservation, WeatherError> {
        match self {
            ForecastResponse::Failure { error } => Err(WeatherError::Api {
                code: error.code,
                message: error
                    .message
                    .unwrap_or_else(|| "unspecified provider error".to_string()),
            }),
            ForecastResponse::Success { location, current } => Ok(WeatherObservation {
                location_name: location.name,
                country: location.country,
                temperature_c: current.temp_c,
                feels_like_c: current.feelslike_c,
                humidity: current.humidity,
                uv_index: current.uv,
                wind_kph: current.wind_kph,
                condition_code: current.condition.code,
                condition_text: current.condition.text,
                condition_icon: current.condition.icon,
                last_updated: current.last_updated,
            }),
        }
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Provider error{}: {message}", code_suffix(.code))]
    Api { code: Option<i64>, message: String },
}

fn code_suffix(code: &Option<i64>) -> String {
    code.map(|c| format!(" {}", c)).unwrap_or_default()
}
