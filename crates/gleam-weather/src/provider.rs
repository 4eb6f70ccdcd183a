//! weatherapi.com forecast client.

use reqwest::Client;
use tracing::instrument;

use crate::types::{ForecastResponse, WeatherError};

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Only the current-conditions snapshot is used, so one day is requested.
pub const FORECAST_DAYS: u8 = 1;

#[derive(Clone)]
pub struct WeatherProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for WeatherProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl WeatherProvider {
    pub fn new(api_key: &str) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Client against another endpoint root. No request timeout is set.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, WeatherError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the forecast body for a query token.
    ///
    /// Provider-side failures (bad location, invalid key, quota) come back
    /// as `Ok(ForecastResponse::Failure)`; only transport and decoding
    /// problems are `Err`. Each call issues exactly one request.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, query: &str, lang: &str) -> Result<ForecastResponse, WeatherError> {
        let url = format!("{}/forecast.json", self.base_url);
        let days = FORECAST_DAYS.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("days", days.as_str()),
                ("lang", lang),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let parsed: ForecastResponse = serde_json::from_str(&body).map_err(|e| {
            WeatherError::Parse(format!("{} (HTTP {}): {}", e, status, truncate(&body, 120)))
        })?;

        if parsed.is_error() {
            tracing::debug!(%status, "Provider returned an error body");
        } else {
            tracing::debug!(%status, "Forecast received");
        }

        Ok(parsed)
    }
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
