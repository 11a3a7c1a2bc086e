//! Client-side DTOs for the todo API.
//!
//! # Design
//! These mirror the server's wire shapes but are defined independently so the
//! client never links against Axum. The live-server integration test catches
//! any drift between the two crates.

use serde::{Deserialize, Serialize};

pub type TodoId = u32;

/// A single todo item as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub is_completed: bool,
}

/// Request payload for creating a todo. New todos always start incomplete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub name: String,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

/// The `{status, msg, data}` wrapper around every `/api/todos*` response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub status: u16,
    pub msg: String,
    #[serde(default)]
    pub data: Vec<Todo>,
}
