//! Todo store trait definition.

use async_trait::async_trait;

use crate::{StoreResult, Task};

/// Trait for task storage operations.
///
/// Every call maps to a single committed statement against the backend;
/// callers hold no cached rows between calls.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Lists all tasks.
    async fn list_tasks(&self) -> StoreResult<Vec<Task>>;

    /// Inserts a new task with the given title, not yet complete.
    async fn insert_task(&self, title: &str) -> StoreResult<Task>;

    /// Gets a task by ID.
    async fn get_task(&self, id: i64) -> StoreResult<Option<Task>>;

    /// Updates a task's completion flag.
    ///
    /// Returns [`StoreError::NotFound`] if no row with the task's ID exists.
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    async fn update_task(&self, task: Task) -> StoreResult<Task>;

    /// Deletes a task.
    ///
    /// Returns [`StoreError::NotFound`] if no row with the ID exists.
    ///
    /// [`StoreError::NotFound`]: crate::StoreError::NotFound
    async fn delete_task(&self, id: i64) -> StoreResult<()>;
}
