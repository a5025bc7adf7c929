//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging. `Transport` covers failures where no response
//! exists at all (connection refused, timeouts).

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and `Transport`
/// implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialize(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialize(String),

    /// The HTTP round-trip itself failed; no response was received.
    #[error("transport failed: {0}")]
    Transport(String),
}
