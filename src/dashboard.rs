//! Multi-provider dashboard aggregation.
//!
//! Fan-out: issue one request per provider concurrently, wait for all of
//! them to settle, and merge whichever succeeded. A provider failing never
//! fails the dashboard; its error lands in [`Dashboard::failures`] and its
//! slot stays empty.

use tracing::warn;

use crate::client::Dashmix;
use crate::error::{Error, Result};
use crate::providers::ProviderId;
use crate::providers::giphy::{Gif, GifParams, Rating};
use crate::providers::nasa::Apod;
use crate::providers::superhero::Hero;
use crate::providers::tmdb::Movie;

/// Aggregated dashboard content. Any subset of the slots may be filled.
#[derive(Debug, Default)]
pub struct Dashboard {
    pub hero: Option<Hero>,
    pub apod: Option<Apod>,
    pub gifs: Vec<Gif>,
    pub movies: Vec<Movie>,
    /// Providers that failed, with the error each produced.
    pub failures: Vec<(ProviderId, Error)>,
}

impl Dashboard {
    /// True when every provider failed.
    pub fn is_empty(&self) -> bool {
        self.hero.is_none() && self.apod.is_none() && self.gifs.is_empty() && self.movies.is_empty()
    }

    /// Whether a specific provider failed.
    pub fn failed(&self, provider: ProviderId) -> bool {
        self.failures.iter().any(|(p, _)| *p == provider)
    }

    fn take<T>(&mut self, provider: ProviderId, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(provider = %provider, %error, "dashboard slot failed");
                self.failures.push((provider, error));
                None
            }
        }
    }
}

impl Dashmix {
    /// Build a dashboard from random/default picks: a random hero, today's
    /// astronomy picture, one random GIF, and the first page of popular
    /// movies.
    pub async fn random_dashboard(&self) -> Dashboard {
        let (hero, apod, gif, movies) = futures::join!(
            self.superhero().random(),
            self.nasa().apod_today(),
            self.giphy().random(Rating::G),
            self.tmdb().popular(1),
        );

        let mut dashboard = Dashboard::default();
        dashboard.hero = dashboard.take(ProviderId::Superhero, hero);
        dashboard.apod = dashboard.take(ProviderId::Nasa, apod);
        dashboard.gifs = dashboard
            .take(ProviderId::Giphy, gif)
            .map(|g| vec![g])
            .unwrap_or_default();
        dashboard.movies = dashboard
            .take(ProviderId::Tmdb, movies)
            .map(|page| page.movies)
            .unwrap_or_default();
        dashboard
    }

    /// Build a dashboard themed by a search term: hero, GIF, and movie
    /// searches share the theme; the astronomy picture is today's either way.
    pub async fn themed_dashboard(&self, theme: &str) -> Dashboard {
        let gif_params = GifParams::default();
        let (heroes, apod, gifs, movies) = futures::join!(
            self.superhero().search(theme),
            self.nasa().apod_today(),
            self.giphy().search(theme, &gif_params),
            self.tmdb().search(theme),
        );

        let mut dashboard = Dashboard::default();
        dashboard.hero = dashboard
            .take(ProviderId::Superhero, heroes)
            .and_then(|mut heroes| {
                if heroes.is_empty() {
                    None
                } else {
                    Some(heroes.swap_remove(0))
                }
            });
        dashboard.apod = dashboard.take(ProviderId::Nasa, apod);
        dashboard.gifs = dashboard.take(ProviderId::Giphy, gifs).unwrap_or_default();
        dashboard.movies = dashboard
            .take(ProviderId::Tmdb, movies)
            .map(|page| page.movies)
            .unwrap_or_default();
        dashboard
    }
}
