//! NASA API client.

use chrono::NaiveDate;
use reqwest::Client as HttpClient;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::execution::{self, UrlBuilder};
use crate::providers::ProviderId;

use super::types::{Apod, ApodResponse, MarsPhoto, MarsPhotosResponse};

/// NASA's published shared key. Works without registration, but with a much
/// lower rate limit than a personal key.
pub const DEMO_KEY: &str = "DEMO_KEY";

/// Client for NASA's APOD and Mars rover photo APIs (query-parameter key).
#[derive(Debug, Clone)]
pub struct NasaClient {
    config: ProviderConfig,
    http_client: HttpClient,
}

impl NasaClient {
    pub(crate) const fn new(config: ProviderConfig, http_client: HttpClient) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Builder for a path under the NASA API with the key attached.
    fn authed(&self, segments: &[&str]) -> UrlBuilder {
        let key = self.config.key_or(DEMO_KEY);
        let mut url = UrlBuilder::new(&self.config.base_url);
        for segment in segments {
            url = url.push(segment);
        }
        self.config.provider.auth_scheme().apply(url, &key)
    }

    /// Astronomy picture of the day for a specific date.
    pub async fn apod(&self, date: NaiveDate) -> Result<Apod> {
        let url = self
            .authed(&["planetary", "apod"])
            .query("date", &date.format("%Y-%m-%d").to_string())
            .build();
        let response: ApodResponse =
            execution::get_json(&self.http_client, ProviderId::Nasa, &url).await?;
        Ok(Apod::from_api(response))
    }

    /// Today's astronomy picture (no `date` parameter).
    pub async fn apod_today(&self) -> Result<Apod> {
        let url = self.authed(&["planetary", "apod"]).build();
        let response: ApodResponse =
            execution::get_json(&self.http_client, ProviderId::Nasa, &url).await?;
        Ok(Apod::from_api(response))
    }

    /// Curiosity rover photos taken on the given Martian sol.
    pub async fn mars_photos(&self, sol: u32) -> Result<Vec<MarsPhoto>> {
        let url = self
            .authed(&["mars-photos", "api", "v1", "rovers", "curiosity", "photos"])
            .query("sol", &sol.to_string())
            .build();
        let response: MarsPhotosResponse =
            execution::get_json(&self.http_client, ProviderId::Nasa, &url).await?;
        Ok(response
            .photos
            .into_iter()
            .map(MarsPhoto::from_api)
            .collect())
    }

    /// Probe the configured key (or `DEMO_KEY`) with an APOD request.
    pub async fn validate_key(&self) -> Result<()> {
        self.apod_today().await.map(|_| ())
    }
}
