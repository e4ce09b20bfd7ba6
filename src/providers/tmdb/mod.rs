//! TMDB movie catalog provider.
//!
//! Query-parameter authentication with paged list responses.

mod client;
mod types;

pub use client::TmdbClient;
pub use types::{Movie, MoviePage};
