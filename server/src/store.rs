//! In-memory todo store.
//!
//! Records live in a map keyed by id; a separate id list keeps insertion
//! order so listings come back in the order todos were created. Nothing is
//! persisted.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use thiserror::Error;

use crate::types::{Todo, TodoId, UpdateTodo};

/// Exclusive upper bound of the id range used by [`IdPolicy::Random`].
pub const RANDOM_ID_LIMIT: TodoId = 100;

/// How `TodoStore::create` picks the id of a new todo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum IdPolicy {
    /// One past the largest id ever stored. Ids are never reused.
    #[default]
    Sequential,
    /// A free id drawn uniformly from `0..RANDOM_ID_LIMIT`.
    Random,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Could not find a todo with an id of {0}")]
    NotFound(TodoId),

    #[error("No free todo id left below {limit}")]
    IdSpaceExhausted { limit: TodoId },
}

#[derive(Debug)]
pub struct TodoStore {
    todos: HashMap<TodoId, Todo>,
    order: Vec<TodoId>,
    policy: IdPolicy,
    /// `None` once `TodoId::MAX` has been stored.
    next_id: Option<TodoId>,
}

impl TodoStore {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            todos: HashMap::new(),
            order: Vec::new(),
            policy,
            next_id: Some(1),
        }
    }

    /// A store holding the two todos the service starts with.
    pub fn seeded(policy: IdPolicy) -> Self {
        let mut store = Self::new(policy);
        store.push(Todo {
            id: 1,
            name: "Learn LaTeX".to_string(),
            is_completed: false,
        });
        store.push(Todo {
            id: 2,
            name: "Learn Rust".to_string(),
            is_completed: false,
        });
        store
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn list(&self) -> Vec<Todo> {
        self.order
            .iter()
            .filter_map(|id| self.todos.get(id))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.get(&id)
    }

    pub fn create(&mut self, name: String) -> Result<Todo, StoreError> {
        let id = self.allocate_id()?;
        let todo = Todo {
            id,
            name,
            is_completed: false,
        };
        self.push(todo.clone());
        Ok(todo)
    }

    /// Merges `patch` into the todo with `id`. The todo keeps its position.
    pub fn update(&mut self, id: TodoId, patch: UpdateTodo) -> Result<Todo, StoreError> {
        let todo = self.todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        patch.apply(todo);
        Ok(todo.clone())
    }

    /// Removes the todo with `id`, if any. Deleting an unknown id is a no-op.
    pub fn delete(&mut self, id: TodoId) -> Option<Todo> {
        let removed = self.todos.remove(&id)?;
        self.order.retain(|&other| other != id);
        Some(removed)
    }

    fn push(&mut self, todo: Todo) {
        if self.next_id.is_some_and(|next| todo.id >= next) {
            self.next_id = todo.id.checked_add(1);
        }
        self.order.push(todo.id);
        self.todos.insert(todo.id, todo);
    }

    fn allocate_id(&self) -> Result<TodoId, StoreError> {
        match self.policy {
            IdPolicy::Sequential => self
                .next_id
                .ok_or(StoreError::IdSpaceExhausted { limit: TodoId::MAX }),
            IdPolicy::Random => {
                let free: Vec<TodoId> = (0..RANDOM_ID_LIMIT)
                    .filter(|id| !self.todos.contains_key(id))
                    .collect();
                free.choose(&mut rand::thread_rng())
                    .copied()
                    .ok_or(StoreError::IdSpaceExhausted {
                        limit: RANDOM_ID_LIMIT,
                    })
            }
        }
    }
}
