mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gleam_core::{App, AppError, Language};
use gleam_ui::{html, Dashboard, Event, RenderBundle, Selection};
use gleam_weather::{LocationChoice, WeatherProvider};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::Command;

/// Current weather with a theme, outfit, drink, playlist and a short poem.
#[derive(Parser, Debug)]
#[command(name = "gleam", version, about)]
struct Args {
    /// Display and response language (ko, en)
    #[arg(short, long)]
    lang: Option<Language>,

    /// Location choice: current, korea, japan, usa, input (labels in either language work)
    #[arg(short = 'L', long, value_parser = parse_location)]
    location: Option<LocationChoice>,

    /// City used by the direct-input choice
    #[arg(short, long)]
    city: Option<String>,

    /// Geolocation latitude for the current-location choice
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Geolocation longitude for the current-location choice
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Config file (defaults to <config dir>/gleam/config.toml)
    #[arg(long, env = "GLEAM_CONFIG")]
    config: Option<PathBuf>,

    /// Print the render bundle as JSON
    #[arg(long)]
    json: bool,

    /// Also write a standalone HTML page to this path
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Read commands from stdin and re-render after each one
    #[arg(short, long)]
    interactive: bool,
}

fn parse_location(s: &str) -> Result<LocationChoice, String> {
    LocationChoice::from_label(s).ok_or_else(|| {
        format!(
            "unknown location '{}' (expected current, korea, japan, usa or input)",
            s
        )
    })
}

impl Args {
    /// CLI flags as events on top of the configured selection.
    fn events(&self) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(lang) = self.lang {
            events.push(Event::SelectLanguage(lang));
        }
        if let Some(city) = &self.city {
            events.push(Event::EnterCity(city.clone()));
        }
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            events.push(Event::GeolocationAcquired(gleam_weather::Coordinates::new(
                lat, lon,
            )));
        }
        match self.location {
            Some(choice) => events.push(Event::SelectLocation(choice)),
            // A bare --city means the user wants that city
            None if self.city.is_some() => {
                events.push(Event::SelectLocation(LocationChoice::DirectInput))
            }
            None => {}
        }
        events
    }
}

fn emit(bundle: &RenderBundle, args: &Args) -> Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(bundle).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        print!("{}", bundle);
    }

    if let Some(path) = &args.html {
        let page = html::render_page(bundle).context("Failed to render HTML page")?;
        std::fs::write(path, page)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
    }
    Ok(())
}

async fn run_interactive(
    dashboard: &Dashboard<WeatherProvider>,
    mut selection: Selection,
    args: &Args,
) -> Result<()> {
    emit(&dashboard.render(&selection).await, args)?;
    eprintln!("{}", selection.status_line());
    eprintln!("{}", commands::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match commands::parse(&line) {
            Ok(Command::Apply(event)) => {
                tracing::debug!(?event, "Applying event");
                selection = selection.apply(event);
                eprintln!("{}", selection.status_line());
                emit(&dashboard.render(&selection).await, args)?;
            }
            Ok(Command::Show) => emit(&dashboard.render(&selection).await, args)?,
            Ok(Command::Help) => eprintln!("{}", commands::HELP),
            Ok(Command::Quit) => break,
            Err(msg) => eprintln!("{}", msg),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    gleam_core::init()?;

    let mut app = App::with_config_path(args.config.as_deref())?;
    let config = app.shared_config();

    let api_key = config.weather.require_api_key().map_err(|e| {
        let err = AppError::from(e);
        eprintln!("{}", err.user_message());
        err
    })?;
    let provider = WeatherProvider::with_base_url(api_key, &config.weather.base_url)
        .context("Failed to build HTTP client")?;
    let dashboard = Dashboard::new(provider);

    let selection = args
        .events()
        .into_iter()
        .fold(Selection::from_config(&config.ui), |s, e| s.apply(e));
    tracing::debug!(?selection, "Initial selection");

    if args.interactive {
        run_interactive(&dashboard, selection, &args).await?;
    } else {
        emit(&dashboard.render(&selection).await, &args)?;
    }

    app.shutdown()?;
    Ok(())
}
