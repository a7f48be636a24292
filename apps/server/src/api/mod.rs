//! HTTP endpoints.

pub mod tasks;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use todo_store::TodoStore;

use crate::state::AppState;

/// Creates the router with all routes configured.
pub fn create_router<S: TodoStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/", get(tasks::home))
        .route("/add", post(tasks::add))
        .route("/update/:id", get(tasks::update))
        .route("/delete/:id", get(tasks::delete))
        .route("/host", get(tasks::host))
}
