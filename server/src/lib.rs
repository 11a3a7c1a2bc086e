//! In-memory todo HTTP API.
//!
//! # Overview
//! Six routes over a single collection of todos: a plain-text greeting at
//! `/` and create/read/update/delete under `/api/todos`. Every `/api/*`
//! response is an [`Envelope`] `{status, msg, data}` whose `data` is a list.
//!
//! # Design
//! - The store is owned by the router state (`Db`), not by a global. Writers
//!   hold the write lock for the whole read-modify-write.
//! - Ids come from an [`IdPolicy`]: a monotonic counter by default, or a
//!   collision-checked draw from `0..100`.
//! - Updating a missing id is a 404 envelope; reading or deleting one is a
//!   200 with empty `data`.

pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod store;
pub mod types;

use std::{future::Future, sync::Arc};

use axum::{routing::get, Router};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use envelope::Envelope;
pub use error::ApiError;
pub use store::{IdPolicy, StoreError, TodoStore, RANDOM_ID_LIMIT};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};

pub type Db = Arc<RwLock<TodoStore>>;

pub fn new_db(store: TodoStore) -> Db {
    Arc::new(RwLock::new(store))
}

/// Router over a fresh seeded store with sequential ids.
pub fn app() -> Router {
    router(new_db(TodoStore::seeded(IdPolicy::default())))
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/", get(handlers::greeting))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    serve(listener, db, std::future::pending()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, db: Db, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(db))
        .with_graceful_shutdown(shutdown)
        .await
}
