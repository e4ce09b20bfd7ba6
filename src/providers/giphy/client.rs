//! GIPHY API client.

use reqwest::Client as HttpClient;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::execution::{self, UrlBuilder};
use crate::providers::ProviderId;

use super::types::{Gif, GifListResponse, GifParams, GifSingleResponse, Rating};

/// Client for the GIPHY GIF API (query-parameter key).
#[derive(Debug, Clone)]
pub struct GiphyClient {
    config: ProviderConfig,
    http_client: HttpClient,
}

impl GiphyClient {
    pub(crate) const fn new(config: ProviderConfig, http_client: HttpClient) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn authed(&self, endpoint: &str) -> Result<UrlBuilder> {
        let key = self.config.require_key()?;
        Ok(self
            .config
            .provider
            .auth_scheme()
            .apply(UrlBuilder::new(&self.config.base_url).push(endpoint), key))
    }

    async fn list(&self, url: String) -> Result<Vec<Gif>> {
        let response: GifListResponse =
            execution::get_json(&self.http_client, ProviderId::Giphy, &url).await?;
        Ok(response.data.into_iter().map(Gif::from_api).collect())
    }

    /// Search GIFs by query.
    pub async fn search(&self, query: &str, params: &GifParams) -> Result<Vec<Gif>> {
        let url = self
            .authed("search")?
            .query("q", query.trim())
            .query("limit", &params.limit.to_string())
            .query("rating", params.rating.as_str())
            .build();
        self.list(url).await
    }

    /// Currently trending GIFs.
    pub async fn trending(&self, params: &GifParams) -> Result<Vec<Gif>> {
        let url = self
            .authed("trending")?
            .query("limit", &params.limit.to_string())
            .query("rating", params.rating.as_str())
            .build();
        self.list(url).await
    }

    /// A single random GIF within the rating filter.
    pub async fn random(&self, rating: Rating) -> Result<Gif> {
        let url = self
            .authed("random")?
            .query("rating", rating.as_str())
            .build();
        let response: GifSingleResponse =
            execution::get_json(&self.http_client, ProviderId::Giphy, &url).await?;
        Ok(Gif::from_api(response.data))
    }

    /// Probe the configured key with a minimal trending request.
    pub async fn validate_key(&self) -> Result<()> {
        let params = GifParams {
            limit: 1,
            rating: Rating::G,
        };
        self.trending(&params).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn search_url_carries_defaults() {
        let client = GiphyClient::new(
            ProviderConfig::new(ProviderId::Giphy).with_api_key("K"),
            HttpClient::new(),
        );
        let params = GifParams::default();
        let url = client
            .authed("search")
            .unwrap()
            .query("q", "space cats")
            .query("limit", &params.limit.to_string())
            .query("rating", params.rating.as_str())
            .build();
        assert_eq!(
            url,
            "https://api.giphy.com/v1/gifs/search?api_key=K&q=space%20cats&limit=12&rating=g"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_io() {
        let client = GiphyClient::new(ProviderConfig::new(ProviderId::Giphy), HttpClient::new());
        let err = client.trending(&GifParams::default()).await.unwrap_err();
        assert!(matches!(
            err,
            Error::MissingCredential {
                provider: ProviderId::Giphy
            }
        ));
    }
}
