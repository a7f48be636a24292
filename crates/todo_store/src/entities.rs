//! Entity types for the todo store

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single item on the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Identifier assigned by the storage backend on insert
    pub id: i64,
    /// Title text, set at creation and never modified afterwards
    pub title: String,
    /// Completion flag
    pub complete: bool,
}
