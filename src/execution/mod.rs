//! Shared request execution layer.
//!
//! Centralizes URL construction and HTTP request/response handling so the
//! per-provider clients stay thin: build a URL, call [`http::get_json`],
//! normalize the payload.

pub mod http;
pub mod url;

pub use http::get_json;
pub use url::UrlBuilder;
