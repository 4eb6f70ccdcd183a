//! Dashboard state and the render pipeline.
//!
//! The selection is an immutable snapshot. Input events produce a new
//! snapshot via [`Selection::apply`]; [`Dashboard::render`] turns one
//! snapshot into a bundle: language → location → fetch → render.

use std::future::Future;

use gleam_core::{Language, UiConfig};
use gleam_weather::{
    decimal, resolve, Coordinates, ForecastResponse, LocationChoice, LocationQuery, WeatherError,
    WeatherProvider, FALLBACK_CITY,
};
use serde::{Deserialize, Serialize};

use crate::error_mapping::WeatherErrorExt;
use crate::language::table;
use crate::render::{build_bundle, RenderBundle};

/// Everything the user has chosen so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub language: Language,
    pub location: LocationChoice,
    /// Direct-input text; kept while another choice is active.
    pub city: String,
    pub geolocation: Option<Coordinates>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            language: Language::default(),
            location: LocationChoice::default(),
            city: FALLBACK_CITY.to_string(),
            geolocation: None,
        }
    }
}

/// User input that changes the selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelectLanguage(Language),
    SelectLocation(LocationChoice),
    EnterCity(String),
    GeolocationAcquired(Coordinates),
    GeolocationLost,
}

impl Selection {
    /// Initial selection from config. An unknown location label resolves to
    /// [`FALLBACK_CITY`] whatever the geolocation reading.
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            language: ui.language,
            location: LocationChoice::from_label_or_fallback(&ui.location),
            city: ui.city.clone(),
            geolocation: None,
        }
    }

    /// Next snapshot after an event.
    #[must_use]
    pub fn apply(&self, event: Event) -> Self {
        let mut next = self.clone();
        match event {
            Event::SelectLanguage(language) => next.language = language,
            Event::SelectLocation(choice) => next.location = choice,
            Event::EnterCity(city) => next.city = city,
            Event::GeolocationAcquired(coords) => next.geolocation = Some(coords),
            Event::GeolocationLost => next.geolocation = None,
        }
        next
    }

    pub fn query(&self) -> LocationQuery {
        resolve(self.location, Some(&self.city), self.geolocation)
    }

    /// One-line summary of the selector state in the active language.
    pub fn status_line(&self) -> String {
        let t = table(self.language);
        let mut line = format!(
            "{}  {} · {}: {}",
            t.settings_label,
            self.language,
            t.location_label,
            t.location_choice_label(self.location)
        );
        match self.location {
            LocationChoice::DirectInput if self.city.trim().is_empty() => {
                line.push_str(&format!(" ({})", t.city_prompt));
            }
            LocationChoice::DirectInput => line.push_str(&format!(" ({})", self.city)),
            LocationChoice::CurrentLocation => {
                if let Some(c) = self.geolocation {
                    line.push_str(&format!(" ({}, {})", decimal(c.latitude), decimal(c.longitude)));
                }
            }
            _ => {}
        }
        line
    }
}

/// Where forecasts come from.
pub trait ForecastSource {
    fn forecast(
        &self,
        query: &str,
        lang: &str,
    ) -> impl Future<Output = Result<ForecastResponse, WeatherError>> + Send;
}

impl ForecastSource for WeatherProvider {
    fn forecast(
        &self,
        query: &str,
        lang: &str,
    ) -> impl Future<Output = Result<ForecastResponse, WeatherError>> + Send {
        self.fetch(query, lang)
    }
}

pub struct Dashboard<S> {
    source: S,
}

impl<S: ForecastSource> Dashboard<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Render one snapshot. Never fails: any fetch problem yields a
    /// title-only bundle and a warning in the log.
    pub async fn render(&self, selection: &Selection) -> RenderBundle {
        let query = selection.query();
        let lang = selection.language;

        match self.source.forecast(query.as_str(), lang.api_code()).await {
            Ok(response) => build_bundle(lang, &query, response),
            Err(e) => {
                let app_err = e.into_app_error();
                tracing::warn!(
                    query = %query,
                    hint = app_err.user_message(),
                    "Weather fetch failed: {}",
                    app_err
                );
                RenderBundle::empty(lang, &query)
            }
        }
    }
}
