//! Client builder.
//!
//! Assembles the immutable configuration for [`Dashmix`]: shared HTTP
//! settings, per-provider API keys (set directly or loaded from a
//! [`KeyStore`]), and per-provider base URL overrides for tests.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Dashmix;
use crate::config::{HttpConfig, ProviderConfig};
use crate::error::Result;
use crate::keystore::{Credentials, KeyStore};
use crate::providers::ProviderId;

/// Builder for [`Dashmix`].
///
/// # Example
/// ```rust,no_run
/// use dashmix::Dashmix;
/// use dashmix::providers::ProviderId;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Dashmix::builder()
///         .api_key(ProviderId::Giphy, "your-giphy-key")
///         .api_key(ProviderId::Tmdb, "your-tmdb-key")
///         .build()?;
///
///     let dashboard = client.themed_dashboard("space").await;
///     println!("{} movies, {} gifs", dashboard.movies.len(), dashboard.gifs.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DashmixBuilder {
    http: HttpConfig,
    credentials: Credentials,
    base_urls: HashMap<ProviderId, String>,
}

impl DashmixBuilder {
    /// New builder with default HTTP settings and no keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout for all providers.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.http.user_agent = user_agent.into();
        self
    }

    /// Attach an extra header to every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.http.headers.insert(name.into(), value.into());
        self
    }

    /// Set one provider's API key. Blank keys are ignored.
    pub fn api_key(mut self, provider: ProviderId, key: impl Into<String>) -> Self {
        self.credentials.set(provider, key);
        self
    }

    /// Overlay a whole credential set.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials.merge(credentials);
        self
    }

    /// Load and overlay credentials from a store.
    pub fn load_keys(mut self, store: &dyn KeyStore) -> Result<Self> {
        self.credentials.merge(store.load()?);
        Ok(self)
    }

    /// Override a provider's base endpoint (tests point this at a mock
    /// server).
    pub fn base_url(mut self, provider: ProviderId, base_url: impl Into<String>) -> Self {
        self.base_urls.insert(provider, base_url.into());
        self
    }

    fn provider_config(&self, provider: ProviderId) -> ProviderConfig {
        let mut config = ProviderConfig::new(provider);
        if let Some(base_url) = self.base_urls.get(&provider) {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(key) = self.credentials.get(provider) {
            config = config.with_api_key(key);
        }
        config
    }

    /// Build the client.
    pub fn build(self) -> Result<Dashmix> {
        Dashmix::from_parts(
            &self.http,
            self.provider_config(ProviderId::Superhero),
            self.provider_config(ProviderId::Nasa),
            self.provider_config(ProviderId::Giphy),
            self.provider_config(ProviderId::Tmdb),
        )
    }
}
