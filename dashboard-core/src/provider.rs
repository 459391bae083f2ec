use crate::{Config, FetchError, Location, WeatherSnapshot, provider::openweather::OneCallFetcher};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of weather snapshots. The view-state holder takes one of these so
/// tests can substitute their own.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch(&self, location: &Location) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the OpenWeather fetcher from config.
pub fn fetcher_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherFetcher>> {
    let api_key = config.resolve_api_key()?;

    Ok(Box::new(OneCallFetcher::with_base_url(api_key, config.base_url.clone())))
}
