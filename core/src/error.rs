//! Error types for the list service client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the list or item does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Server` with the raw status
//! code and body for debugging. `Network` is never produced by the parse
//! methods themselves — it is the variant the executing host uses to report
//! transport failures through the same taxonomy.

use thiserror::Error;

/// Errors returned by `ListClient` parse methods and request executors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested list or item does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("decoding response failed: {0}")]
    Decode(String),

    /// The request never produced a response (connectivity, timeout).
    #[error("network failure: {0}")]
    Network(String),
}
