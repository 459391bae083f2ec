use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use tracing::{debug, warn};

use crate::{
    config::DEFAULT_BASE_URL,
    error::FetchError,
    model::{Location, WeatherSnapshot},
};

use super::WeatherFetcher;

/// Fetches the OpenWeather "one call" payload (current, hourly and daily
/// forecast in a single request) in metric units.
#[derive(Clone)]
pub struct OneCallFetcher {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OneCallFetcher {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self::with_client(api_key, base_url, Client::new())
    }

    pub fn with_client(api_key: String, base_url: String, http: Client) -> Self {
        Self { api_key, base_url, http }
    }

    fn endpoint(&self) -> String {
        format!("{}/data/2.5/onecall", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for OneCallFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneCallFetcher")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl WeatherFetcher for OneCallFetcher {
    async fn fetch(&self, location: &Location) -> Result<WeatherSnapshot, FetchError> {
        let url = self.endpoint();
        debug!(
            %url,
            latitude = location.latitude,
            longitude = location.longitude,
            "requesting one call payload"
        );

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lon", location.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "one call request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let snapshot: WeatherSnapshot = serde_json::from_str(&body)?;
        debug!(
            hourly = snapshot.hourly.len(),
            daily = snapshot.daily.len(),
            "decoded one call payload"
        );

        Ok(snapshot)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
