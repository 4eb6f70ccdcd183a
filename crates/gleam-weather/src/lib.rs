//! Weather access for Gleam
//!
//! Resolves a location selection into a query token and fetches current
//! conditions from the weatherapi.com forecast endpoint.

pub mod location;
pub mod provider;
pub mod types;

pub use location::{
    decimal, resolve, resolve_label, Coordinates, LocationChoice, LocationQuery, FALLBACK_CITY,
};
pub use provider::{WeatherProvider, DEFAULT_BASE_URL, FORECAST_DAYS};
pub use types::*;
