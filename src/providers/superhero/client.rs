//! Superhero API client.

use rand::Rng;
use reqwest::Client as HttpClient;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use crate::execution::{self, UrlBuilder};
use crate::providers::ProviderId;

use super::types::{Hero, HeroEnvelope, SearchResponse};

/// Lowest valid hero id.
pub const MIN_HERO_ID: u32 = 1;
/// Highest valid hero id.
pub const MAX_HERO_ID: u32 = 731;

/// Client for the superhero database (path-embedded key).
#[derive(Debug, Clone)]
pub struct SuperheroClient {
    config: ProviderConfig,
    http_client: HttpClient,
}

impl SuperheroClient {
    pub(crate) const fn new(config: ProviderConfig, http_client: HttpClient) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Base builder with the key already placed: `{base}/{key}`.
    fn authed(&self) -> Result<UrlBuilder> {
        let key = self.config.require_key()?;
        Ok(self
            .config
            .provider
            .auth_scheme()
            .apply(UrlBuilder::new(&self.config.base_url), key))
    }

    /// Search heroes by name. No matches is an empty vec, not an error.
    pub async fn search(&self, name: &str) -> Result<Vec<Hero>> {
        let url = self
            .authed()?
            .push("search")
            .push_encoded(name.trim())
            .build();
        let response: SearchResponse =
            execution::get_json(&self.http_client, ProviderId::Superhero, &url).await?;

        if response.response != "success" {
            debug!(error = ?response.error, "superhero search returned no results");
            return Ok(Vec::new());
        }
        Ok(response.results.into_iter().map(Hero::from_api).collect())
    }

    /// Fetch a single hero by numeric id.
    pub async fn by_id(&self, id: u32) -> Result<Hero> {
        let url = self.authed()?.push(&id.to_string()).build();
        let envelope: HeroEnvelope =
            execution::get_json(&self.http_client, ProviderId::Superhero, &url).await?;

        if envelope.response != "success" {
            // Invalid ids come back as HTTP 200 with an error marker.
            return Err(Error::Api {
                provider: ProviderId::Superhero,
                status: 200,
                message: envelope
                    .error
                    .unwrap_or_else(|| format!("no hero with id {id}")),
            });
        }
        Ok(Hero::from_api(envelope.hero))
    }

    /// Fetch a uniformly random hero from the valid id range.
    pub async fn random(&self) -> Result<Hero> {
        let id = rand::thread_rng().gen_range(MIN_HERO_ID..=MAX_HERO_ID);
        self.by_id(id).await
    }

    /// Probe the configured key with the cheapest real request.
    pub async fn validate_key(&self) -> Result<()> {
        self.by_id(MIN_HERO_ID).await.map(|_| ())
    }
}
