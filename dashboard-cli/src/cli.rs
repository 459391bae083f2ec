use anyhow::{Context, Result, bail};
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use dashboard_core::{
    Config, Dashboard, Location, ViewState, WeatherViewModel, fetcher_from_config,
};
use inquire::{CustomType, Password, PasswordDisplayMode, Text};
use std::io::IsTerminal;
use tokio::sync::oneshot;

use crate::render::{self, TextDashboard};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Terminal weather dashboard")]
pub struct Cli {
    /// Defaults to `show` with the configured location.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the forecast and draw the dashboard.
    Show(ShowArgs),

    /// Store the API key and location in the config file.
    Configure,
}

#[derive(Debug, Default, Args)]
pub struct ShowArgs {
    /// Latitude, overriding the configured location.
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude, overriding the configured location.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Name shown in the header.
    #[arg(long)]
    pub name: Option<String>,

    /// Format times in UTC instead of the local time zone.
    #[arg(long)]
    pub utc: bool,

    /// Print the dashboard as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    fn location(&self, configured: &Location) -> Location {
        let mut location = configured.clone();
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            location.latitude = lat;
            location.longitude = lon;
            if self.name.is_none() {
                location.name = format!("{lat:.4}, {lon:.4}");
            }
        }
        if let Some(name) = &self.name {
            location.name = name.clone();
        }
        location
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command.unwrap_or_else(|| Command::Show(ShowArgs::default())) {
            Command::Show(args) => show(args).await,
            Command::Configure => configure(),
        }
    }
}

async fn show(args: ShowArgs) -> Result<()> {
    let config = Config::load()?;
    let location = args.location(&config.location);
    let fetcher = fetcher_from_config(&config)?;

    let view_model = WeatherViewModel::new(fetcher, location.clone());

    let animation = std::io::stderr().is_terminal().then(|| {
        let (stop, stopped) = oneshot::channel();
        (stop, tokio::spawn(render::loading_animation(stopped)))
    });

    let state = view_model.settled().await;

    if let Some((stop, handle)) = animation {
        stop.send(()).ok();
        handle.await.ok();
    }

    let snapshot = match state {
        ViewState::Loaded(snapshot) => snapshot,
        ViewState::Failed(err) => {
            return Err(anyhow::Error::new(err))
                .with_context(|| format!("Could not load weather for {}", location.name));
        }
        ViewState::Loading => bail!("Weather fetch for {} ended without a result", location.name),
    };

    let dashboard = if args.utc {
        Dashboard::build(&snapshot, &location.name, config.hourly_tiles, &Utc)
    } else {
        Dashboard::build(&snapshot, &location.name, config.hourly_tiles, &Local)
    };

    if args.json {
        let json = serde_json::to_string_pretty(&dashboard)
            .context("Failed to serialize dashboard to JSON")?;
        println!("{json}");
    } else {
        print!("{}", TextDashboard(&dashboard));
    }

    Ok(())
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let name = Text::new("Location name:").with_default(&config.location.name).prompt()?;
    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(config.location.latitude)
        .with_error_message("Please type a decimal number")
        .prompt()?;
    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(config.location.longitude)
        .with_error_message("Please type a decimal number")
        .prompt()?;

    config.set_api_key(api_key.trim().to_string());
    config.set_location(Location { name, latitude, longitude });
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_show() {
        let cli = Cli::try_parse_from(["weather-dashboard"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "weather-dashboard",
            "show",
            "--lat",
            "-33.8688",
            "--lon",
            "151.2093",
            "--utc",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Show(args)) => {
                assert_eq!(args.lat, Some(-33.8688));
                assert_eq!(args.lon, Some(151.2093));
                assert!(args.utc);
                assert!(!args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn latitude_requires_longitude() {
        let err = Cli::try_parse_from(["weather-dashboard", "show", "--lat", "10"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn coordinates_override_configured_location() {
        let args = ShowArgs { lat: Some(1.5), lon: Some(2.25), ..Default::default() };
        let location = args.location(&Location::default());

        assert_eq!(location.latitude, 1.5);
        assert_eq!(location.longitude, 2.25);
        assert_eq!(location.name, "1.5000, 2.2500");
    }

    #[test]
    fn name_only_keeps_configured_coordinates() {
        let args = ShowArgs { name: Some("Home".into()), ..Default::default() };
        let location = args.location(&Location::default());

        assert_eq!(location.name, "Home");
        assert_eq!(location.latitude, Location::default().latitude);
    }
}
