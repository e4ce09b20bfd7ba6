//! Error handling for dashmix.
//!
//! A single crate-wide [`Error`] enum covers every provider. Non-2xx HTTP
//! responses are classified by status code so callers can tell an invalid
//! key (`Auth`) from a quota problem (`RateLimited`) or a plain upstream
//! failure (`Api`).

use reqwest::header::HeaderMap;
use thiserror::Error;

use crate::providers::ProviderId;

/// Result type for dashmix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the dashboard providers.
#[derive(Error, Debug)]
pub enum Error {
    /// The provider mandates an API key and none is configured.
    #[error("missing API key for {provider}")]
    MissingCredential {
        /// Provider that refused to build a request.
        provider: ProviderId,
    },

    /// Transport-level failure (DNS, TLS, connect, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body could not be parsed as the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Json(String),

    /// 401/403 from the provider, usually an invalid or expired key.
    #[error("{provider} authentication failed: {message}")]
    Auth {
        provider: ProviderId,
        message: String,
    },

    /// 429 from the provider.
    #[error("{provider} rate limited: {message}")]
    RateLimited {
        provider: ProviderId,
        message: String,
    },

    /// Any other non-2xx answer.
    #[error("{provider} API error (HTTP {status}): {message}")]
    Api {
        provider: ProviderId,
        status: u16,
        message: String,
    },

    /// Client construction or configuration problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Credential store I/O problem.
    #[error("key store error: {0}")]
    Store(String),
}

impl Error {
    /// HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { .. } => Some(401),
            Self::RateLimited { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the failure is an authentication problem the user can fix
    /// by supplying a valid key.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::MissingCredential { .. } | Self::Auth { .. })
    }

    /// Classify a non-2xx response into the matching error variant.
    ///
    /// The body is sampled rather than embedded whole; provider error pages
    /// can be arbitrarily large and they end up in logs.
    pub fn classify(
        provider: ProviderId,
        status: u16,
        body_text: &str,
        headers: &HeaderMap,
    ) -> Self {
        let body_sample: String = body_text.chars().take(200).collect();

        match status {
            401 | 403 => Self::Auth {
                provider,
                message: format!("http={status} body_sample={body_sample}"),
            },
            429 => {
                let retry_after = headers
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("");
                Self::RateLimited {
                    provider,
                    message: format!("retry_after={retry_after} body_sample={body_sample}"),
                }
            }
            _ => Self::Api {
                provider,
                status,
                message: body_sample,
            },
        }
    }
}

// From implementations for common error types

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_splits_auth_and_rate_limit_out_of_api() {
        let headers = HeaderMap::new();
        let auth = Error::classify(ProviderId::Tmdb, 401, "invalid key", &headers);
        assert!(matches!(auth, Error::Auth { .. }));
        assert_eq!(auth.status(), Some(401));

        let forbidden = Error::classify(ProviderId::Giphy, 403, "", &headers);
        assert!(matches!(forbidden, Error::Auth { .. }));

        let limited = Error::classify(ProviderId::Nasa, 429, "over quota", &headers);
        assert!(matches!(limited, Error::RateLimited { .. }));
        assert_eq!(limited.status(), Some(429));

        let other = Error::classify(ProviderId::Superhero, 500, "boom", &headers);
        match other {
            Error::Api { status, .. } => assert_eq!(status, 500),
            e => panic!("unexpected variant: {e:?}"),
        }
    }

    #[test]
    fn classify_includes_retry_after_hint() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", "120".parse().unwrap());
        let err = Error::classify(ProviderId::Nasa, 429, "", &headers);
        match err {
            Error::RateLimited { message, .. } => assert!(message.contains("retry_after=120")),
            e => panic!("unexpected variant: {e:?}"),
        }
    }

    #[test]
    fn classify_truncates_large_bodies() {
        let body = "x".repeat(10_000);
        let err = Error::classify(ProviderId::Tmdb, 500, &body, &HeaderMap::new());
        match err {
            Error::Api { message, .. } => assert_eq!(message.len(), 200),
            e => panic!("unexpected variant: {e:?}"),
        }
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn missing_credential_is_auth() {
        let err = Error::MissingCredential {
            provider: ProviderId::Giphy,
        };
        assert!(err.is_auth());
        assert_eq!(err.status(), None);
    }
}
