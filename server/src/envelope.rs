//! The `{status, msg, data}` wrapper every `/api/todos*` response uses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// `data` is always a list, even for single-record reads and for writes that
/// return nothing.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub msg: String,
    pub data: Vec<T>,
}

impl<T> Envelope<T> {
    pub fn new(status: StatusCode, msg: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            status: status.as_u16(),
            msg: msg.into(),
            data,
        }
    }

    pub fn ok(msg: impl Into<String>, data: Vec<T>) -> Self {
        Self::new(StatusCode::OK, msg, data)
    }

    pub fn created(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::CREATED, msg, Vec::new())
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
