//! Provider implementations.
//!
//! Four unrelated REST APIs sit behind the same pattern: an immutable
//! [`ProviderConfig`](crate::config::ProviderConfig), a typed URL builder
//! respecting the provider's auth placement, and a normalizer from the wire
//! shape to a display-ready record.

pub mod giphy;
pub mod nasa;
pub mod superhero;
pub mod tmdb;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::auth::AuthScheme;

/// The closed set of dashboard providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Superhero database (path-embedded key).
    Superhero,
    /// NASA astronomy picture of the day and Mars rover photos.
    Nasa,
    /// GIPHY animated-image search.
    Giphy,
    /// The Movie Database catalog.
    Tmdb,
}

impl ProviderId {
    /// Every provider, in dashboard order.
    pub const ALL: [Self; 4] = [Self::Superhero, Self::Nasa, Self::Giphy, Self::Tmdb];

    /// Stable lowercase name, also used as the persisted credential key.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Superhero => "superhero",
            Self::Nasa => "nasa",
            Self::Giphy => "giphy",
            Self::Tmdb => "tmdb",
        }
    }

    /// Public API endpoint for this provider.
    pub const fn default_base_url(&self) -> &'static str {
        match self {
            Self::Superhero => "https://superheroapi.com/api",
            Self::Nasa => "https://api.nasa.gov",
            Self::Giphy => "https://api.giphy.com/v1/gifs",
            Self::Tmdb => "https://api.themoviedb.org/3",
        }
    }

    /// Where this provider expects its API key.
    pub const fn auth_scheme(&self) -> AuthScheme {
        match self {
            Self::Superhero => AuthScheme::PathSegment,
            Self::Nasa | Self::Giphy | Self::Tmdb => AuthScheme::QueryParam { name: "api_key" },
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
