//! Interactive mode commands.

use gleam_core::Language;
use gleam_ui::Event;
use gleam_weather::{Coordinates, LocationChoice};

pub const HELP: &str = "\
commands:
  lang <ko|en>          switch display language
  loc <label>           choose location (current, korea, japan, usa, input)
  city <name>           set the direct-input city
  geo <lat>,<lon>       provide a geolocation reading
  nogeo                 forget the geolocation reading
  show                  render again
  help                  this text
  quit                  exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Apply(Event),
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines re-render.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "" | "show" | "refresh" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "lang" => rest
            .parse::<Language>()
            .map(|l| Command::Apply(Event::SelectLanguage(l)))
            .map_err(|e| e.to_string()),
        "loc" | "location" => LocationChoice::from_label(rest)
            .map(|c| Command::Apply(Event::SelectLocation(c)))
            .ok_or_else(|| format!("unknown location '{}'", rest)),
        // Passed through as typed, empty included
        "city" => Ok(Command::Apply(Event::EnterCity(rest.to_string()))),
        "geo" => parse_coordinates(rest).map(|c| Command::Apply(Event::GeolocationAcquired(c))),
        "nogeo" => Ok(Command::Apply(Event::GeolocationLost)),
        other => Err(format!("unknown command '{}' (try help)", other)),
    }
}

/// `lat,lon`, each a plain decimal number.
pub fn parse_coordinates(s: &str) -> Result<Coordinates, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected <lat>,<lon>, got '{}'", s))?;
    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let longitude: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(format!("coordinates out of range: {},{}", latitude, longitude));
    }
    Ok(Coordinates::new(latitude, longitude))
}
