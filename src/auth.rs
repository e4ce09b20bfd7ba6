//! Authentication placement rules.
//!
//! Each provider decides where its API key lives in the request URL. The
//! superhero API embeds it as a literal path segment; the other three pass
//! it as a query parameter. The placement is a static property of the
//! provider, not a runtime abstraction.

use secrecy::{ExposeSecret, SecretString};

/// Where a provider expects its API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// Key embedded as a literal path segment, e.g. `/api/{key}/search/batman`.
    PathSegment,
    /// Key passed in the query string under the given parameter name,
    /// e.g. `?api_key=...`.
    QueryParam {
        /// Query parameter name carrying the key.
        name: &'static str,
    },
}

impl AuthScheme {
    /// Apply this placement to a URL under construction.
    pub fn apply(&self, url: crate::execution::UrlBuilder, key: &SecretString) -> crate::execution::UrlBuilder {
        match self {
            Self::PathSegment => url.push_encoded(key.expose_secret()),
            Self::QueryParam { name } => url.query(name, key.expose_secret()),
        }
    }
}
