//! Render bundle: everything one dashboard pass shows.
//!
//! Building a bundle is pure. The terminal form is the `Display` impl; see
//! [`crate::html`] for the page form.

use std::fmt;

use chrono::{DateTime, Utc};
use gleam_core::Language;
use gleam_weather::{decimal, ForecastResponse, LocationQuery, WeatherObservation};
use serde::Serialize;

use crate::language::{table, LanguageTable};
use crate::recommend::{Drink, PoemKind};
use crate::theme::Theme;

#[derive(Debug, Clone, Serialize)]
pub struct RenderBundle {
    pub language: Language,
    pub title: String,
    pub query: String,
    pub generated_at: DateTime<Utc>,
    /// `None` whenever the fetch failed; nothing below the title is shown.
    pub weather: Option<WeatherSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSection {
    pub theme: Theme,
    pub background: String,
    pub main_card: MainCard,
    pub metrics: Vec<Metric>,
    pub outfit: Recommendation,
    pub drink: Recommendation,
    pub music: Playlist,
    pub poem_kind: PoemKind,
    pub poem: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainCard {
    pub location: String,
    pub icon_url: Option<String>,
    pub temperature: String,
    pub condition: String,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub heading: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Playlist {
    pub heading: String,
    pub label: String,
    pub songs: Vec<String>,
}

/// Weather section for a successful observation.
pub fn build_section(obs: &WeatherObservation, t: &LanguageTable) -> WeatherSection {
    let theme = Theme::classify(obs.condition_code, &obs.condition_text);
    let drink = Drink::for_temperature(obs.temperature_c);
    let poem_kind = PoemKind::select(obs.condition_code, &obs.condition_text);

    WeatherSection {
        theme,
        background: theme.gradient().to_string(),
        main_card: MainCard {
            location: format!("📍 {}, {}", obs.location_name, obs.country),
            icon_url: obs.icon_url(),
            temperature: format!("{}°", decimal(obs.temperature_c)),
            condition: obs.condition_text.clone(),
            last_updated: obs.last_updated.clone(),
        },
        metrics: vec![
            Metric {
                label: t.humidity.to_string(),
                value: format!("{}%", obs.humidity),
            },
            Metric {
                label: t.feels_like.to_string(),
                value: format!("{}°", decimal(obs.feels_like_c)),
            },
            Metric {
                label: t.uv.to_string(),
                value: decimal(obs.uv_index),
            },
            Metric {
                label: t.wind.to_string(),
                value: format!("{}kph", decimal(obs.wind_kph)),
            },
        ],
        outfit: Recommendation {
            heading: t.outfit_heading.to_string(),
            text: t.outfit.to_string(),
        },
        drink: Recommendation {
            heading: t.drink_heading.to_string(),
            text: drink.text(t).to_string(),
        },
        music: Playlist {
            heading: t.music_heading.to_string(),
            label: t.playlist_label.to_string(),
            songs: t.songs.iter().map(|s| s.to_string()).collect(),
        },
        poem_kind,
        poem: poem_kind.text(t).to_string(),
    }
}

impl RenderBundle {
    /// Title-only bundle, used when no weather could be obtained.
    pub fn empty(language: Language, query: &LocationQuery) -> Self {
        Self {
            language,
            title: table(language).app_name.to_string(),
            query: query.to_string(),
            generated_at: Utc::now(),
            weather: None,
        }
    }

    pub fn has_weather(&self) -> bool {
        self.weather.is_some()
    }
}

/// Bundle for a provider response. An `error` body yields a title-only bundle.
pub fn build_bundle(
    language: Language,
    query: &LocationQuery,
    response: ForecastResponse,
) -> RenderBundle {
    let mut bundle = RenderBundle::empty(language, query);
    match response.into_observation() {
        Ok(obs) => bundle.weather = Some(build_section(&obs, table(language))),
        Err(e) => tracing::warn!(query = %query, "Weather unavailable: {}", e),
    }
    bundle
}

impl fmt::Display for RenderBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;

        let Some(w) = &self.weather else {
            return Ok(());
        };

        writeln!(f)?;
        writeln!(f, "{}", w.main_card.location)?;
        writeln!(f, "{}  {}", w.main_card.temperature, w.main_card.condition)?;
        if let Some(icon) = &w.main_card.icon_url {
            writeln!(f, "{}", icon)?;
        }

        writeln!(f)?;
        let metrics = w
            .metrics
            .iter()
            .map(|m| format!("{}: {}", m.label, m.value))
            .collect::<Vec<_>>()
            .join("  |  ");
        writeln!(f, "{}", metrics)?;

        writeln!(f)?;
        for rec in [&w.outfit, &w.drink] {
            writeln!(f, "{}", rec.heading)?;
            writeln!(f, "  {}", rec.text)?;
        }
        writeln!(f, "{}", w.music.heading)?;
        writeln!(f, "  {}", w.music.label)?;
        for song in &w.music.songs {
            writeln!(f, "    - {}", song)?;
        }

        writeln!(f)?;
        for line in w.poem.lines() {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(temp_c: f64, code: i32, text: &str) -> ForecastResponse {
        serde_json::from_value(serde_json::json!({
            "location": {"name": "Paris", "country": "France"},
            "current": {
                "last_updated": "2026-10-19 08:45",
                "temp_c": temp_c,
                "feelslike_c": 19.75,
                "humidity": 72,
                "uv": 6.0,
                "wind_kph": 14.4,
                "condition": {"text": text, "code": code, "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png"}
            }
        }))
        .unwrap()
    }

    fn query() -> LocationQuery {
        LocationQuery::new("Paris")
    }

    #[test]
    fn test_numeric_fields_keep_input_precision() {
        let bundle = build_bundle(Language::English, &query(), mock_response(21.3, 1000, "Sunny"));
        let w = bundle.weather.unwrap();

        assert_eq!(w.main_card.temperature, "21.3°");
        let values: Vec<&str> = w.metrics.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["72%", "19.75°", "6.0", "14.4kph"]);
    }

    #[test]
    fn test_whole_temperature_keeps_decimal() {
        let bundle = build_bundle(Language::English, &query(), mock_response(20.0, 1030, "Mist"));
        assert_eq!(bundle.weather.unwrap().main_card.temperature, "20.0°");
    }

    #[test]
    fn test_metric_labels_follow_language() {
        let en = build_bundle(Language::English, &query(), mock_response(21.3, 1000, "Sunny"));
        let ko = build_bundle(Language::Korean, &query(), mock_response(21.3, 1000, "맑음"));

        let en_labels: Vec<String> = en.weather.unwrap().metrics.into_iter().map(|m| m.label).collect();
        let ko_labels: Vec<String> = ko.weather.unwrap().metrics.into_iter().map(|m| m.label).collect();
        assert_eq!(en_labels, vec!["Humidity", "Feels Like", "UV Index", "Wind"]);
        assert_eq!(ko_labels, vec!["습도", "체감 온도", "자외선", "풍속"]);
    }

    #[test]
    fn test_section_selections() {
        let bundle = build_bundle(Language::English, &query(), mock_response(12.0, 1195, "Heavy rain"));
        let w = bundle.weather.unwrap();

        assert_eq!(w.theme, Theme::Rainy);
        assert_eq!(w.background, Theme::Rainy.gradient());
        assert_eq!(w.drink.text, "☕ Warm Chamomile Tea");
        assert_eq!(w.poem_kind, PoemKind::Rain);
        assert_eq!(w.outfit.text, "🧥 Trench Coat / 👖 Slacks");
        assert_eq!(
            w.music.songs,
            vec!["Day6 - You Were Beautiful", "IU - Through the Night"]
        );
        assert_eq!(w.main_card.location, "📍 Paris, France");
        assert_eq!(
            w.main_card.icon_url.as_deref(),
            Some("https://cdn.weatherapi.com/weather/64x64/day/113.png")
        );
    }

    #[test]
    fn test_error_response_renders_title_only() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "error": {"code": 1006, "message": "No matching location found."}
        }))
        .unwrap();

        let bundle = build_bundle(Language::Korean, &LocationQuery::new("zzqx"), response);
        assert!(!bundle.has_weather());
        assert_eq!(bundle.title, "✨ 빛슬 웨더");

        let text = bundle.to_string();
        assert_eq!(text.trim(), "✨ 빛슬 웨더");
    }

    #[test]
    fn test_text_output_contains_all_fragments() {
        let bundle = build_bundle(Language::English, &query(), mock_response(25.5, 1000, "Sunny"));
        let text = bundle.to_string();

        assert!(text.starts_with("✨ Gleam Weather"));
        assert!(text.contains("📍 Paris, France"));
        assert!(text.contains("25.5°  Sunny"));
        assert!(text.contains("Humidity: 72%"));
        assert!(text.contains("Wind: 14.4kph"));
        assert!(text.contains("🥤 Iced Earl Grey"));
        assert!(text.contains("- IU - Through the Night"));
        assert!(text.contains("May your day blossom with light"));

        let day6 = text.find("Day6").unwrap();
        let iu = text.find("IU - ").unwrap();
        assert!(day6 < iu, "songs keep table order");
    }

    #[test]
    fn test_bundle_serializes_to_json() {
        let bundle = build_bundle(Language::English, &query(), mock_response(21.3, 1003, "Partly cloudy"));
        let json = serde_json::to_value(&bundle).unwrap();

        assert_eq!(json["language"], "en");
        assert_eq!(json["weather"]["theme"], "cloudy");
        assert_eq!(json["weather"]["main_card"]["temperature"], "21.3°");
    }

    #[test]
    fn test_tiny_values_never_use_exponent() {
        let mut response = mock_response(0.00001, 1000, "Sunny");
        if let ForecastResponse::Success { current, .. } = &mut response {
            current.uv = 0.00005;
        }
        let w = build_bundle(Language::English, &query(), response).weather.unwrap();

        assert_eq!(w.main_card.temperature, "0.00001°");
        assert_eq!(w.metrics[2].value, "0.00005");
    }
}
