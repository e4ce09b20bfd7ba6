//! Unified HTTP GET execution.
//!
//! All four providers are read-only JSON APIs, so a single GET path covers
//! every operation: send, classify non-2xx responses consistently, parse the
//! body into the caller's wire type.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::providers::ProviderId;

/// Execute a GET request and deserialize the JSON response body.
///
/// Non-2xx responses are turned into classified errors via
/// [`Error::classify`]; the URL itself is never logged because path-auth
/// providers carry the key inside it.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    provider: ProviderId,
    url: &str,
) -> Result<T> {
    debug!(provider = %provider, "sending GET request");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Http(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let headers = response.headers().clone();
        let body = response.text().await.unwrap_or_default();
        let error = Error::classify(provider, status.as_u16(), &body, &headers);
        warn!(provider = %provider, status = status.as_u16(), "request failed");
        return Err(error);
    }

    let text = response
        .text()
        .await
        .map_err(|e| Error::Http(e.to_string()))?;

    serde_json::from_str(&text).map_err(|e| Error::Json(e.to_string()))
}
