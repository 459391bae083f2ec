//! Core library for the `weather-dashboard` binary.
//!
//! This crate defines:
//! - Configuration (location, API key, base URL)
//! - The one call fetcher and its error taxonomy
//! - The one-shot view state the dashboard observes
//! - Pure presentation mapping from a snapshot to display values
//!
//! Rendering is left to the host; `weather-dashboard` draws it in a terminal.

pub mod config;
pub mod error;
pub mod model;
pub mod presentation;
pub mod provider;
pub mod state;

pub use config::Config;
pub use error::FetchError;
pub use model::{
    ConditionCode, CurrentConditions, DailyPoint, HourlyPoint, Location, TempRange,
    WeatherSnapshot,
};
pub use presentation::{IconCategory, dashboard::Dashboard, icon_for};
pub use provider::{WeatherFetcher, fetcher_from_config, openweather::OneCallFetcher};
pub use state::{ViewState, WeatherViewModel};
