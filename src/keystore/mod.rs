//! Credential storage.
//!
//! API keys are opaque per-provider strings, persisted through the
//! [`KeyStore`] trait so the credential store is testable without a real
//! storage backend.
//!
//! Implementations:
//! - [`file::FileStore`]: single JSON document on disk (production)
//! - [`memory::MemoryStore`]: no persistence (tests)
//!
//! Keys are never validated for format; blank values are permitted and
//! treated as "not configured".

pub mod file;
pub mod memory;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::providers::ProviderId;

/// Abstract interface for credential persistence.
pub trait KeyStore {
    /// Load all stored credentials. A missing backing record yields the
    /// empty set, not an error.
    fn load(&self) -> Result<Credentials>;

    /// Persist the given credentials, replacing whatever was stored.
    fn save(&mut self, credentials: &Credentials) -> Result<()>;
}

/// Per-provider API keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(flatten)]
    keys: HashMap<ProviderId, String>,
}

impl Credentials {
    /// Empty credential set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a key for a provider. Blank input removes the entry.
    pub fn set(&mut self, provider: ProviderId, key: impl Into<String>) {
        let key = key.into();
        if key.trim().is_empty() {
            self.keys.remove(&provider);
        } else {
            self.keys.insert(provider, key);
        }
    }

    /// The stored key for a provider, if one is configured and non-blank.
    pub fn get(&self, provider: ProviderId) -> Option<&str> {
        self.keys
            .get(&provider)
            .map(String::as_str)
            .filter(|k| !k.trim().is_empty())
    }

    /// How many providers have a key configured.
    pub fn configured_count(&self) -> usize {
        ProviderId::ALL
            .iter()
            .filter(|p| self.get(**p).is_some())
            .count()
    }

    /// Total number of providers, for "N of M configured" readouts.
    pub const fn total() -> usize {
        ProviderId::ALL.len()
    }

    /// Overlay another credential set; entries in `other` win.
    pub fn merge(&mut self, other: Credentials) {
        for (provider, key) in other.keys {
            self.set(provider, key);
        }
    }
}
