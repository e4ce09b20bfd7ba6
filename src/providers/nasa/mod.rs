//! NASA provider: astronomy picture of the day and Mars rover photos.
//!
//! Query-parameter authentication (`?api_key=...`). Unlike the other
//! providers, NASA publishes a shared `DEMO_KEY`, so requests never fail
//! fast on a missing credential; they fall back to the demo key and its
//! tighter quota instead.

mod client;
mod types;

pub use client::{DEMO_KEY, NasaClient};
pub use types::{Apod, MarsPhoto, MediaType};
