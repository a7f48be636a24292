//! External MySQL backend.
//!
//! Near-twin of the SQLite backend; the trait keeps the handlers unaware of
//! which one is in use. Credential problems surface here on first connect,
//! never earlier.

use async_trait::async_trait;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, Pool};

use crate::{StoreError, StoreResult, Task, TodoStore};

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id BIGINT AUTO_INCREMENT PRIMARY KEY,
    title VARCHAR(100) NOT NULL DEFAULT '',
    complete BOOLEAN NOT NULL DEFAULT FALSE
)";

/// Task store backed by an external MySQL server.
pub struct MySqlTodoStore {
    pool: Pool<MySql>,
}

impl MySqlTodoStore {
    /// Connects to the server at `url` and ensures the schema exists.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await?;

        sqlx::query(SCHEMA_SQL).execute(&pool).await?;
        tracing::debug!("tasks table ensured");

        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoStore for MySqlTodoStore {
    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        let tasks = sqlx::query_as("SELECT id, title, complete FROM tasks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    async fn insert_task(&self, title: &str) -> StoreResult<Task> {
        let result = sqlx::query("INSERT INTO tasks (title, complete) VALUES (?, FALSE)")
            .bind(title)
            .execute(&self.pool)
            .await?;

        Ok(Task {
            id: result.last_insert_id() as i64,
            title: title.to_string(),
            complete: false,
        })
    }

    async fn get_task(&self, id: i64) -> StoreResult<Option<Task>> {
        let task = sqlx::query_as("SELECT id, title, complete FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    async fn update_task(&self, task: Task) -> StoreResult<Task> {
        let result = sqlx::query("UPDATE tasks SET complete = ? WHERE id = ?")
            .bind(task.complete)
            .bind(task.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(task.id));
        }
        Ok(task)
    }

    async fn delete_task(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(id));
        }
        Ok(())
    }
}
