//! Client configuration.
//!
//! Configuration is immutable once built: the builder assembles an
//! [`HttpConfig`] plus one [`ProviderConfig`] per provider and hands them to
//! the request builders by reference. Nothing mutates configuration at
//! request time.

use std::collections::HashMap;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};
use crate::providers::ProviderId;

/// Default request timeout applied to the shared HTTP client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP settings for the underlying `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Extra headers attached to every request.
    pub headers: HashMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("dashmix/", env!("CARGO_PKG_VERSION")).to_string(),
            headers: HashMap::new(),
        }
    }
}

/// Immutable per-provider configuration handed to request builders.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Which provider this configuration belongs to.
    pub provider: ProviderId,
    /// API key, if one is configured. Blank keys are normalized to `None`.
    pub api_key: Option<SecretString>,
    /// Base endpoint, defaulting to the provider's public API.
    pub base_url: String,
}

impl ProviderConfig {
    /// Create a configuration with the provider's default endpoint and no key.
    pub fn new(provider: ProviderId) -> Self {
        Self {
            provider,
            api_key: None,
            base_url: provider.default_base_url().to_string(),
        }
    }

    /// Set the API key. Blank input leaves the key unset.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        if !key.trim().is_empty() {
            self.api_key = Some(SecretString::from(key));
        }
        self
    }

    /// Override the base endpoint (used by tests to point at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The configured key, failing fast with [`Error::MissingCredential`]
    /// before any I/O when none is set.
    pub fn require_key(&self) -> Result<&SecretString> {
        match &self.api_key {
            Some(key) if !key.expose_secret().trim().is_empty() => Ok(key),
            _ => Err(Error::MissingCredential {
                provider: self.provider,
            }),
        }
    }

    /// The configured key, or the given fallback when none is set.
    ///
    /// NASA publishes a shared `DEMO_KEY` with tight quotas; its client uses
    /// this instead of failing fast.
    pub fn key_or(&self, fallback: &str) -> SecretString {
        match &self.api_key {
            Some(key) if !key.expose_secret().trim().is_empty() => key.clone(),
            _ => SecretString::from(fallback),
        }
    }
}
