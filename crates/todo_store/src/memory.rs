//! In-memory implementation for testing

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{StoreError, StoreResult, Task, TodoStore};

/// In-memory todo store.
///
/// Assigns sequential IDs like the SQL backends do and enforces the same
/// not-found contract on update and delete.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    tasks: HashMap<i64, Task>,
    next_id: i64,
}

impl MemoryTodoStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list_tasks(&self) -> StoreResult<Vec<Task>> {
        let inner = self.inner.read().await;
        let mut tasks: Vec<Task> = inner.tasks.values().cloned().collect();
        tasks.sort_by_key(|task| task.id);
        Ok(tasks)
    }

    async fn insert_task(&self, title: &str) -> StoreResult<Task> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let task = Task {
            id: inner.next_id,
            title: title.to_string(),
            complete: false,
        };
        inner.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn get_task(&self, id: i64) -> StoreResult<Option<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.get(&id).cloned())
    }

    async fn update_task(&self, task: Task) -> StoreResult<Task> {
        let mut inner = self.inner.write().await;
        if !inner.tasks.contains_key(&task.id) {
            return Err(StoreError::not_found(task.id));
        }
        inner.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn delete_task(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if inner.tasks.remove(&id).is_none() {
            return Err(StoreError::not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_task_crud() {
        let store = MemoryTodoStore::new();

        // Create
        let created = store.insert_task("buy milk").await.unwrap();
        assert_eq!(created.title, "buy milk");
        assert!(!created.complete);

        // Get
        let fetched = store.get_task(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "buy milk");

        // List
        let tasks = store.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);

        // Delete
        store.delete_task(created.id).await.unwrap();
        assert!(store.get_task(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let store = MemoryTodoStore::new();

        let first = store.insert_task("one").await.unwrap();
        let second = store.insert_task("two").await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let store = MemoryTodoStore::new();
        let task = store.insert_task("water plants").await.unwrap();

        let mut toggled = store.get_task(task.id).await.unwrap().unwrap();
        toggled.complete = !toggled.complete;
        store.update_task(toggled).await.unwrap();

        let mut toggled_back = store.get_task(task.id).await.unwrap().unwrap();
        assert!(toggled_back.complete);
        toggled_back.complete = !toggled_back.complete;
        store.update_task(toggled_back).await.unwrap();

        let fetched = store.get_task(task.id).await.unwrap().unwrap();
        assert!(!fetched.complete);
    }

    #[tokio::test]
    async fn test_missing_update_and_delete_are_not_found() {
        let store = MemoryTodoStore::new();

        let phantom = Task {
            id: 7,
            title: "ghost".to_string(),
            complete: false,
        };
        assert!(matches!(
            store.update_task(phantom).await,
            Err(StoreError::NotFound { id: 7 })
        ));
        assert!(matches!(
            store.delete_task(7).await,
            Err(StoreError::NotFound { id: 7 })
        ));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = MemoryTodoStore::new();

        store.insert_task("one").await.unwrap();
        store.insert_task("two").await.unwrap();
        store.insert_task("three").await.unwrap();

        let tasks = store.list_tasks().await.unwrap();
        let ids: Vec<i64> = tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
