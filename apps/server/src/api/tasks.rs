//! Task list endpoints.
//!
//! Toggle and delete ride on GET links straight from the rendered page.
//! That mirrors the observed contract of the application, link prefetchers
//! included, so it stays that way on purpose.

use std::sync::Arc;

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use todo_store::TodoStore;

use crate::error::{ServerError, ServerResult};
use crate::render;
use crate::state::AppState;

/// Form payload for adding a task.
#[derive(Debug, Deserialize)]
pub struct AddTask {
    /// Title text; an absent field is accepted and stored as empty.
    pub title: Option<String>,
}

/// Renders the task list page.
pub async fn home<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Html<String>> {
    let tasks = state.store.list_tasks().await?;

    Ok(Html(render::home_page(&tasks, &state.config.deployment)))
}

/// Adds a task, then redirects back to the list.
pub async fn add<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Form(form): Form<AddTask>,
) -> ServerResult<Redirect> {
    let title = form.title.unwrap_or_default();
    let task = state.store.insert_task(&title).await?;

    tracing::info!(id = task.id, "Task added");

    Ok(Redirect::to("/"))
}

/// Flips a task's completion flag, then redirects back to the list.
pub async fn update<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
) -> ServerResult<Redirect> {
    let mut task = state
        .store
        .get_task(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("task {id}")))?;

    task.complete = !task.complete;
    let task = state.store.update_task(task).await?;

    tracing::info!(id, complete = task.complete, "Task toggled");

    Ok(Redirect::to("/"))
}

/// Deletes a task, then redirects back to the list.
pub async fn delete<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
) -> ServerResult<Redirect> {
    state.store.delete_task(id).await?;

    tracing::info!(id, "Task deleted");

    Ok(Redirect::to("/"))
}

/// Identifies the deployment host. Touches no storage.
pub async fn host<S: TodoStore>(State(state): State<Arc<AppState<S>>>) -> String {
    format!("Hosted By: {}\n", state.config.deployment.provider)
}
