//! Superhero database provider.
//!
//! The only provider with path-embedded authentication: every request looks
//! like `/api/{key}/...`. Hero ids are a fixed range (1..=731) and power
//! stats come back as strings, sometimes the literal `"null"`.

mod client;
mod types;

pub use client::{MAX_HERO_ID, MIN_HERO_ID, SuperheroClient};
pub use types::{Hero, HeroStats};
