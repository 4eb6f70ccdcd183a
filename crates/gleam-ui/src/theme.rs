use serde::{Deserialize, Serialize};

/// Clear sky.
pub const CODE_SUNNY: i32 = 1000;
/// Partly cloudy, cloudy, overcast.
pub const CODES_CLOUDY: [i32; 3] = [1003, 1006, 1009];

/// Background styling bucket for the current conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Sunny,
    Cloudy,
    Rainy,
    #[default]
    Default,
}

impl Theme {
    /// Sun and cloud are decided by code, rain by the condition text.
    ///
    /// The checks run in that order, so a rain code the provider describes
    /// without a rain word stays `Default`.
    pub fn classify(condition_code: i32, condition_text: &str) -> Self {
        if condition_code == CODE_SUNNY {
            Theme::Sunny
        } else if CODES_CLOUDY.contains(&condition_code) {
            Theme::Cloudy
        } else if mentions_rain(condition_text) {
            Theme::Rainy
        } else {
            Theme::Default
        }
    }

    /// CSS background for the page.
    pub fn gradient(&self) -> &'static str {
        match self {
            Theme::Sunny => "linear-gradient(120deg, #f6d365 0%, #fda085 100%)",
            Theme::Cloudy => "linear-gradient(120deg, #cfd9df 0%, #e2ebf0 100%)",
            Theme::Rainy => "linear-gradient(120deg, #89f7fe 0%, #66a6ff 100%)",
            Theme::Default => "linear-gradient(120deg, #dfe9f3 0%, white 100%)",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Sunny => "sunny",
            Theme::Cloudy => "cloudy",
            Theme::Rainy => "rainy",
            Theme::Default => "default",
        }
    }
}

/// Rain marker in either supported response language.
pub fn mentions_rain(condition_text: &str) -> bool {
    condition_text.to_lowercase().contains("rain") || condition_text.contains('비')
}
