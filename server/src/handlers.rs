use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};
use crate::Db;

type IdSegment = Result<Path<String>, PathRejection>;

/// The integer a client asked for, and the todo id it names if it is in range.
/// An integer outside `TodoId` can never have been created, so it matches
/// nothing rather than failing the request.
struct RequestedId {
    value: i64,
    id: Option<TodoId>,
}

impl RequestedId {
    fn parse(segment: IdSegment) -> Result<Self, ApiError> {
        let Path(raw) = segment?;
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| ApiError::InvalidId(raw.clone()))?;
        Ok(Self {
            value,
            id: TodoId::try_from(value).ok(),
        })
    }
}

pub async fn greeting() -> &'static str {
    "Hello, World!"
}

pub async fn list_todos(State(db): State<Db>) -> Envelope<Todo> {
    let todos = db.read().await.list();
    Envelope::ok("Successfully retrieved all todos.", todos)
}

pub async fn get_todo(
    State(db): State<Db>,
    segment: IdSegment,
) -> Result<Envelope<Todo>, ApiError> {
    let requested = RequestedId::parse(segment)?;
    let found: Vec<Todo> = match requested.id {
        Some(id) => db.read().await.get(id).cloned().into_iter().collect(),
        None => Vec::new(),
    };
    Ok(Envelope::ok(
        format!("Successfully retrieved a todo with an id of {}", requested.value),
        found,
    ))
}

pub async fn create_todo(
    State(db): State<Db>,
    input: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Envelope<Todo>, ApiError> {
    let Json(input) = input?;
    let todo = db.write().await.create(input.name)?;
    tracing::info!(id = todo.id, name = %todo.name, "created todo");
    Ok(Envelope::created(format!(
        "Successfully created a todo with an id of {}",
        todo.id
    )))
}

pub async fn update_todo(
    State(db): State<Db>,
    segment: IdSegment,
    input: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Envelope<Todo>, ApiError> {
    let requested = RequestedId::parse(segment)?;
    let Json(input) = input?;
    let id = requested.id.ok_or(ApiError::NotFound(requested.value))?;
    let todo = db.write().await.update(id, input)?;
    tracing::info!(id, name = %todo.name, is_completed = todo.is_completed, "updated todo");
    Ok(Envelope::ok(
        format!("Successfully updated a todo with an id of {id}"),
        Vec::new(),
    ))
}

pub async fn delete_todo(
    State(db): State<Db>,
    segment: IdSegment,
) -> Result<Envelope<Todo>, ApiError> {
    let requested = RequestedId::parse(segment)?;
    let removed = match requested.id {
        Some(id) => db.write().await.delete(id),
        None => None,
    };
    tracing::info!(id = requested.value, removed = removed.is_some(), "deleted todo");
    Ok(Envelope::ok(
        format!("Successfully deleted a todo with an id of {}", requested.value),
        Vec::new(),
    ))
}
