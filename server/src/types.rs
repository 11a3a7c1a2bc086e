//! Wire types for the todo API.
//!
//! `Todo` is what the store holds and what every read returns. The two input
//! types describe request bodies: `CreateTodo` requires `name`, `UpdateTodo`
//! treats every field as optional and applies only what is present.

use serde::{Deserialize, Serialize};

pub type TodoId = u32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub is_completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub name: String,
}

/// Partial update. `None` keeps the current value; `Some(false)` and
/// `Some(String::new())` are applied like any other value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    pub name: Option<String>,
    pub is_completed: Option<bool>,
}

impl UpdateTodo {
    pub fn apply(self, todo: &mut Todo) {
        if let Some(name) = self.name {
            todo.name = name;
        }
        if let Some(is_completed) = self.is_completed {
            todo.is_completed = is_completed;
        }
    }
}
