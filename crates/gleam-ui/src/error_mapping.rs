use gleam_core::{AppError, ReqwestErrorExt, WeatherError as CoreWeatherError};
use gleam_weather::WeatherError;

/// Maps weather client errors into the application hierarchy.
pub trait WeatherErrorExt {
    fn into_app_error(self) -> AppError;
}

impl WeatherErrorExt for WeatherError {
    fn into_app_error(self) -> AppError {
        match self {
            WeatherError::Network(e) => AppError::Network(e.into_network_error()),
            WeatherError::Parse(s) => AppError::Weather(CoreWeatherError::InvalidResponse(s)),
            e @ WeatherError::Api { .. } => AppError::Weather(CoreWeatherError::ApiError(e.to_string())),
        }
    }
}
