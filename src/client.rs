//! Top-level client.
//!
//! [`Dashmix`] owns one shared `reqwest` client and a client per provider.
//! Provider clients borrow the configuration assembled by the builder and
//! never mutate it.

use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::builder::DashmixBuilder;
use crate::config::{HttpConfig, ProviderConfig};
use crate::error::{Error, Result};
use crate::providers::giphy::GiphyClient;
use crate::providers::nasa::NasaClient;
use crate::providers::superhero::SuperheroClient;
use crate::providers::tmdb::TmdbClient;

/// Unified client over all four dashboard providers.
#[derive(Debug, Clone)]
pub struct Dashmix {
    superhero: SuperheroClient,
    nasa: NasaClient,
    giphy: GiphyClient,
    tmdb: TmdbClient,
}

impl Dashmix {
    /// Start configuring a client.
    pub fn builder() -> DashmixBuilder {
        DashmixBuilder::new()
    }

    pub(crate) fn from_parts(
        http: &HttpConfig,
        superhero: ProviderConfig,
        nasa: ProviderConfig,
        giphy: ProviderConfig,
        tmdb: ProviderConfig,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &http.headers {
            let name: HeaderName = name
                .parse()
                .map_err(|_| Error::Config(format!("invalid header name: {name}")))?;
            let value: HeaderValue = value
                .parse()
                .map_err(|_| Error::Config(format!("invalid value for header {name}")))?;
            headers.insert(name, value);
        }

        let http_client = HttpClient::builder()
            .timeout(http.timeout)
            .user_agent(http.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            superhero: SuperheroClient::new(superhero, http_client.clone()),
            nasa: NasaClient::new(nasa, http_client.clone()),
            giphy: GiphyClient::new(giphy, http_client.clone()),
            tmdb: TmdbClient::new(tmdb, http_client),
        })
    }

    /// Superhero database operations.
    pub fn superhero(&self) -> &SuperheroClient {
        &self.superhero
    }

    /// NASA operations.
    pub fn nasa(&self) -> &NasaClient {
        &self.nasa
    }

    /// GIPHY operations.
    pub fn giphy(&self) -> &GiphyClient {
        &self.giphy
    }

    /// TMDB operations.
    pub fn tmdb(&self) -> &TmdbClient {
        &self.tmdb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ProviderId;

    #[test]
    fn invalid_extra_header_is_a_config_error() {
        let mut http = HttpConfig::default();
        http.headers.insert("bad header".into(), "v".into());
        let result = Dashmix::from_parts(
            &http,
            ProviderConfig::new(ProviderId::Superhero),
            ProviderConfig::new(ProviderId::Nasa),
            ProviderConfig::new(ProviderId::Giphy),
            ProviderConfig::new(ProviderId::Tmdb),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
