//! Lifestyle recommendations derived from current conditions.

use serde::{Deserialize, Serialize};

use crate::language::LanguageTable;
use crate::theme::{mentions_rain, CODE_SUNNY};

/// Above this temperature (°C, exclusive) a cold drink is suggested.
pub const COLD_DRINK_ABOVE_C: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drink {
    Hot,
    Cold,
}

impl Drink {
    pub fn for_temperature(temperature_c: f64) -> Self {
        if temperature_c > COLD_DRINK_ABOVE_C {
            Drink::Cold
        } else {
            Drink::Hot
        }
    }

    pub fn text(&self, table: &LanguageTable) -> &'static str {
        match self {
            Drink::Hot => table.drink_hot,
            Drink::Cold => table.drink_cold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoemKind {
    Sunny,
    Rain,
    Default,
}

impl PoemKind {
    pub fn select(condition_code: i32, condition_text: &str) -> Self {
        if condition_code == CODE_SUNNY {
            PoemKind::Sunny
        } else if mentions_rain(condition_text) {
            PoemKind::Rain
        } else {
            PoemKind::Default
        }
    }

    pub fn text(&self, table: &LanguageTable) -> &'static str {
        match self {
            PoemKind::Sunny => table.poem_sunny,
            PoemKind::Rain => table.poem_rain,
            PoemKind::Default => table.poem_default,
        }
    }
}
