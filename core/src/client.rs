//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Every `/api/todos*` response is an
//! envelope; the parse methods unwrap it into what the caller asked for.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Envelope, Todo, TodoId, UpdateTodo};

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn todo_url(&self, id: TodoId) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    pub fn build_greeting(&self) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, format!("{}/", self.base_url))
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.todos_url())
    }

    pub fn build_get_todo(&self, id: TodoId) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Get, self.todo_url(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Post, self.todos_url(), body))
    }

    pub fn build_update_todo(
        &self,
        id: TodoId,
        input: &UpdateTodo,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest::json(HttpMethod::Put, self.todo_url(id), body))
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        HttpRequest::empty(HttpMethod::Delete, self.todo_url(id))
    }

    pub fn parse_greeting(&self, response: HttpResponse) -> Result<String, ApiError> {
        check_status(&response, 200)?;
        Ok(response.body)
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        Ok(parse_envelope(response, 200)?.data)
    }

    /// `None` when the server has no todo with that id.
    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Option<Todo>, ApiError> {
        Ok(parse_envelope(response, 200)?.data.into_iter().next())
    }

    /// Returns the id the server assigned. Create responses carry no data, so
    /// the id is read from the end of the message.
    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<TodoId, ApiError> {
        let envelope = parse_envelope(response, 201)?;
        envelope
            .msg
            .rsplit(' ')
            .next()
            .and_then(|id| id.parse().ok())
            .ok_or(ApiError::MissingId(envelope.msg))
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_envelope(response, 200).map(|_| ())
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_envelope(response, 200).map(|_| ())
    }
}

fn parse_envelope(response: HttpResponse, expected: u16) -> Result<Envelope, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        let msg = serde_json::from_str::<Envelope>(&response.body)
            .map(|envelope| envelope.msg)
            .unwrap_or_else(|_| response.body.clone());
        return Err(ApiError::NotFound(msg));
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
