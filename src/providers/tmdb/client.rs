//! TMDB API client.

use reqwest::Client as HttpClient;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::execution::{self, UrlBuilder};
use crate::providers::ProviderId;

use super::types::{MovieListResponse, MoviePage};

/// Client for The Movie Database (query-parameter key).
#[derive(Debug, Clone)]
pub struct TmdbClient {
    config: ProviderConfig,
    http_client: HttpClient,
}

impl TmdbClient {
    pub(crate) const fn new(config: ProviderConfig, http_client: HttpClient) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn authed(&self, segments: &[&str]) -> Result<UrlBuilder> {
        let key = self.config.require_key()?;
        let mut url = UrlBuilder::new(&self.config.base_url);
        for segment in segments {
            url = url.push(segment);
        }
        Ok(self.config.provider.auth_scheme().apply(url, key))
    }

    async fn page(&self, url: String) -> Result<MoviePage> {
        let response: MovieListResponse =
            execution::get_json(&self.http_client, ProviderId::Tmdb, &url).await?;
        Ok(MoviePage::from_api(response))
    }

    /// Search movies by title.
    pub async fn search(&self, query: &str) -> Result<MoviePage> {
        let url = self
            .authed(&["search", "movie"])?
            .query("query", query.trim())
            .build();
        self.page(url).await
    }

    /// Popular movies, paged from 1.
    pub async fn popular(&self, page: u32) -> Result<MoviePage> {
        let url = self
            .authed(&["movie", "popular"])?
            .query("page", &page.max(1).to_string())
            .build();
        self.page(url).await
    }

    /// Movies currently in theaters, paged from 1.
    pub async fn now_playing(&self, page: u32) -> Result<MoviePage> {
        let url = self
            .authed(&["movie", "now_playing"])?
            .query("page", &page.max(1).to_string())
            .build();
        self.page(url).await
    }

    /// Probe the configured key with a popular-movies request.
    pub async fn validate_key(&self) -> Result<()> {
        self.popular(1).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn search_url_encodes_query() {
        let client = TmdbClient::new(
            ProviderConfig::new(ProviderId::Tmdb).with_api_key("K"),
            HttpClient::new(),
        );
        let url = client
            .authed(&["search", "movie"])
            .unwrap()
            .query("query", "blade runner")
            .build();
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/search/movie?api_key=K&query=blade%20runner"
        );
    }

    #[test]
    fn popular_url_clamps_page_to_one() {
        let client = TmdbClient::new(
            ProviderConfig::new(ProviderId::Tmdb).with_api_key("K"),
            HttpClient::new(),
        );
        let url = client
            .authed(&["movie", "popular"])
            .unwrap()
            .query("page", &0u32.max(1).to_string())
            .build();
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/movie/popular?api_key=K&page=1"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_io() {
        let client = TmdbClient::new(ProviderConfig::new(ProviderId::Tmdb), HttpClient::new());
        let err = client.popular(1).await.unwrap_err();
        assert!(matches!(
            err,
            Error::MissingCredential {
                provider: ProviderId::Tmdb
            }
        ));
    }
}
