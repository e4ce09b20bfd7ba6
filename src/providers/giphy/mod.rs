//! GIPHY animated-image provider.
//!
//! Query-parameter authentication plus content-filtering parameters: every
//! list operation carries a result `limit` and an audience `rating`.

mod client;
mod types;

pub use client::GiphyClient;
pub use types::{Gif, GifParams, Rating};
