//! Request-level errors.
//!
//! Every variant renders as an envelope with an empty `data` list, so clients
//! of `/api/*` only ever see one response shape.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::envelope::Envelope;
use crate::store::StoreError;
use crate::types::Todo;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An integer id outside the range todo ids are drawn from.
    #[error("Could not find a todo with an id of {0}")]
    NotFound(i64),

    /// The `:id` path segment, verbatim, when it is not an integer.
    #[error("Invalid todo id: {0}")]
    InvalidId(String),

    #[error("{0}")]
    InvalidPath(String),

    /// The body could not be read as the expected JSON shape.
    #[error("Invalid request body: {reason}")]
    InvalidBody { status: StatusCode, reason: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound(_)) | ApiError::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Store(StoreError::IdSpaceExhausted { .. }) => {
                StatusCode::INSUFFICIENT_STORAGE
            }
            ApiError::InvalidId(_) | ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody { status, .. } => *status,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), error = %self, "request failed");
        Envelope::<Todo>::new(status, self.to_string(), Vec::new()).into_response()
    }
}
