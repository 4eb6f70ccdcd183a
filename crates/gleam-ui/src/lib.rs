//! Presentation layer for Gleam
//!
//! Turns a weather observation and the active language into a render
//! bundle (theme, metrics, recommendations, poem) and prints it as
//! terminal text, JSON, or a standalone HTML page.

pub mod dashboard;
pub mod error_mapping;
pub mod html;
pub mod language;
pub mod recommend;
pub mod render;
pub mod theme;

pub use dashboard::{Dashboard, Event, ForecastSource, Selection};
pub use language::{table, LanguageTable};
pub use render::{build_bundle, build_section, RenderBundle, WeatherSection};
pub use theme::Theme;
