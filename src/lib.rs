//! # dashmix
//!
//! A unified client for four unrelated REST APIs — a superhero database,
//! NASA's astronomy picture of the day, GIPHY, and The Movie Database —
//! with typed request builders, normalized display records, and a
//! concurrent dashboard aggregator that tolerates partial failure.
//!
//! Each provider keeps its own authentication convention: the superhero API
//! embeds the key as a URL path segment, the other three pass it as an
//! `api_key` query parameter. Keys are held as [`secrecy::SecretString`]
//! and persisted (opaque, unvalidated) through a pluggable key store.
//!
//! ```rust,no_run
//! use dashmix::{Dashmix, providers::ProviderId};
//! use dashmix::keystore::{KeyStore, file::FileStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FileStore::new("/tmp/dashmix");
//!     let client = Dashmix::builder()
//!         .load_keys(&store)?
//!         .api_key(ProviderId::Giphy, "override-key")
//!         .build()?;
//!
//!     let heroes = client.superhero().search("batman").await?;
//!     let apod = client.nasa().apod_today().await?;
//!     let dashboard = client.random_dashboard().await;
//!     println!("{} heroes, apod {:?}, {} failures",
//!         heroes.len(), apod.title, dashboard.failures.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod builder;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod execution;
pub mod keystore;
pub mod providers;

pub use builder::DashmixBuilder;
pub use client::Dashmix;
pub use dashboard::Dashboard;
pub use error::{Error, Result};

/// Convenience re-exports for callers that want everything in scope.
pub mod prelude {
    pub use crate::builder::DashmixBuilder;
    pub use crate::client::Dashmix;
    pub use crate::dashboard::Dashboard;
    pub use crate::error::{Error, Result};
    pub use crate::keystore::{Credentials, KeyStore, file::FileStore, memory::MemoryStore};
    pub use crate::providers::ProviderId;
    pub use crate::providers::giphy::{Gif, GifParams, Rating};
    pub use crate::providers::nasa::{Apod, MarsPhoto, MediaType};
    pub use crate::providers::superhero::{Hero, HeroStats};
    pub use crate::providers::tmdb::{Movie, MoviePage};
}
