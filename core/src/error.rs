//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a 404 carries the server's own
//! envelope message, which callers usually want to show as-is. All other
//! unexpected statuses land in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404. Holds the envelope `msg` when there is one.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The server returned a status other than the expected one or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// A create response whose message does not end in the new id.
    #[error("no todo id in message: {0}")]
    MissingId(String),
}
