//! Todo Web Server
//!
//! A small server-rendered task list. Tasks live in an embedded SQLite
//! database by default, or in an external MySQL server when the `MYSQL_*`
//! environment variables are set.

pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod state;

use std::sync::Arc;

use axum::Router;
use todo_store::TodoStore;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, create_shared_state};

/// Creates the application router with all routes configured.
pub fn create_app<S: TodoStore + 'static>(state: Arc<AppState<S>>) -> Router {
    api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state with the given configuration and store.
pub fn create_state<S: TodoStore>(config: Config, store: S) -> Arc<AppState<S>> {
    create_shared_state(config, store)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
