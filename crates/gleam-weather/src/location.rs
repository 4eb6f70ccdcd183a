//! Location selection to query token.
//!
//! The provider's `q` parameter accepts a city name or a `lat,lon` pair.
//! Resolution never fails: anything it cannot map becomes [`FALLBACK_CITY`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// City queried when no better location is known.
pub const FALLBACK_CITY: &str = "Seoul";

/// Shortest round-trip decimal form of a float: never an exponent, and
/// whole values keep their `.0`.
pub fn decimal(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Device geolocation reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Entries of the location selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationChoice {
    #[default]
    CurrentLocation,
    SouthKorea,
    Japan,
    Usa,
    DirectInput,
}

impl LocationChoice {
    /// Selector order.
    pub const ALL: [LocationChoice; 5] = [
        LocationChoice::CurrentLocation,
        LocationChoice::SouthKorea,
        LocationChoice::Japan,
        LocationChoice::Usa,
        LocationChoice::DirectInput,
    ];

    /// Canonical city for the named-country entries.
    pub fn city(&self) -> Option<&'static str> {
        match self {
            LocationChoice::SouthKorea => Some("Seoul"),
            LocationChoice::Japan => Some("Tokyo"),
            LocationChoice::Usa => Some("New York"),
            LocationChoice::CurrentLocation | LocationChoice::DirectInput => None,
        }
    }

    /// Match a selector label in any supported language, or a short ASCII alias.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let lower = label.to_lowercase();
        let choice = match lower.as_str() {
            "현재 위치" | "current location" | "current" | "here" | "geo" => {
                LocationChoice::CurrentLocation
            }
            "대한민국" | "south korea" | "korea" | "kr" => LocationChoice::SouthKorea,
            "일본" | "japan" | "jp" => LocationChoice::Japan,
            "미국" | "usa" | "us" | "united states" => LocationChoice::Usa,
            "직접 입력" | "direct input" | "direct" | "input" | "city" => {
                LocationChoice::DirectInput
            }
            _ => return None,
        };
        Some(choice)
    }

    /// Like [`from_label`](Self::from_label), but an unknown label becomes
    /// the entry whose city is [`FALLBACK_CITY`], with a warning.
    pub fn from_label_or_fallback(label: &str) -> Self {
        Self::from_label(label).unwrap_or_else(|| {
            tracing::warn!(label, "Unknown location choice, using {}", FALLBACK_CITY);
            LocationChoice::SouthKorea
        })
    }
}

/// Query token sent as the provider's `q` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationQuery(String);

impl LocationQuery {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn fallback() -> Self {
        Self::new(FALLBACK_CITY)
    }

    /// `lat,lon` at full precision; whole values keep their `.0`.
    pub fn from_coordinates(coords: Coordinates) -> Self {
        Self(format!("{},{}", decimal(coords.latitude), decimal(coords.longitude)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocationQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolve a selector entry into a query token.
///
/// Direct input is passed through unvalidated, including empty text; a bad
/// city surfaces later as a provider error.
pub fn resolve(
    choice: LocationChoice,
    city_input: Option<&str>,
    geolocation: Option<Coordinates>,
) -> LocationQuery {
    match choice {
        LocationChoice::DirectInput => LocationQuery::new(city_input.unwrap_or_default()),
        LocationChoice::CurrentLocation => match geolocation {
            Some(coords) => LocationQuery::from_coordinates(coords),
            None => LocationQuery::fallback(),
        },
        named => named
            .city()
            .map(LocationQuery::new)
            .unwrap_or_else(LocationQuery::fallback),
    }
}

/// Resolve a raw selector label.
///
/// Unknown labels degrade to [`FALLBACK_CITY`] with a warning rather than an error.
pub fn resolve_label(
    label: &str,
    city_input: Option<&str>,
    geolocation: Option<Coordinates>,
) -> LocationQuery {
    resolve(
        LocationChoice::from_label_or_fallback(label),
        city_input,
        geolocation,
    )
}
