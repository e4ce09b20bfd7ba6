//! TMDB wire types and the normalized movie record.

use chrono::NaiveDate;
use serde::Deserialize;

/// Base URL for poster images, combined with the `poster_path` the API sends.
pub(crate) const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w300";

/// Paged list response: `/search/movie`, `/movie/popular`, `/movie/now_playing`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MovieListResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<ApiMovie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiMovie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    /// Empty string for unreleased/unknown dates.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Display-ready movie record.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub release_date: Option<NaiveDate>,
    /// Average vote on TMDB's 0-10 scale.
    pub vote_average: f64,
    /// Path fragment as sent by the API, e.g. `/abc123.jpg`.
    pub poster_path: Option<String>,
}

impl Movie {
    pub(crate) fn from_api(movie: ApiMovie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            // Unreleased movies carry an empty string here.
            release_date: movie
                .release_date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            vote_average: movie.vote_average,
            poster_path: movie.poster_path.filter(|p| !p.is_empty()),
        }
    }

    /// Full poster URL, when the movie has a poster.
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{POSTER_BASE_URL}{path}"))
    }
}

/// One page of a movie listing.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub movies: Vec<Movie>,
}

impl MoviePage {
    pub(crate) fn from_api(response: MovieListResponse) -> Self {
        Self {
            page: response.page,
            total_pages: response.total_pages,
            total_results: response.total_results,
            movies: response.results.into_iter().map(Movie::from_api).collect(),
        }
    }
}
