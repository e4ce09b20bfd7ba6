//! GIPHY wire types, request parameters, and the normalized GIF record.

use serde::Deserialize;

/// Audience rating filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rating {
    /// General audiences. The dashboard default.
    #[default]
    G,
    Pg,
    Pg13,
    R,
}

impl Rating {
    /// Wire value for the `rating` query parameter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::G => "g",
            Self::Pg => "pg",
            Self::Pg13 => "pg-13",
            Self::R => "r",
        }
    }
}

/// Structured parameters for GIF list operations.
#[derive(Debug, Clone)]
pub struct GifParams {
    /// Maximum number of results to return.
    pub limit: u32,
    /// Content filter.
    pub rating: Rating,
}

impl Default for GifParams {
    fn default() -> Self {
        // A dashboard grid shows a dozen thumbnails.
        Self {
            limit: 12,
            rating: Rating::G,
        }
    }
}

/// List response: `/search`, `/trending`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GifListResponse {
    #[serde(default)]
    pub data: Vec<ApiGif>,
}

/// Single-object response: `/random`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GifSingleResponse {
    pub data: ApiGif,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiGif {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Page URL on giphy.com.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub images: ApiImages,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiImages {
    #[serde(default)]
    pub fixed_height: ApiRendition,
    #[serde(default)]
    pub original: ApiRendition,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiRendition {
    #[serde(default)]
    pub url: Option<String>,
}

/// Display-ready GIF record.
#[derive(Debug, Clone, PartialEq)]
pub struct Gif {
    pub id: String,
    pub title: String,
    /// Thumbnail-sized rendition suitable for a grid; falls back to the
    /// original rendition when the fixed-height one is missing.
    pub display_url: Option<String>,
    /// Page URL on giphy.com.
    pub page_url: Option<String>,
}

impl Gif {
    pub(crate) fn from_api(gif: ApiGif) -> Self {
        Self {
            id: gif.id,
            title: gif.title,
            display_url: gif.images.fixed_height.url.or(gif.images.original.url),
            page_url: gif.url,
        }
    }
}
