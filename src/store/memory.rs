//! In-memory implementation of the persistence gateway.
//!
//! A test double with the same observable contract as the PostgreSQL
//! store: monotonic store-assigned ids, insertion ordering, cascade on
//! list deletion, silent no-ops for missing ids. It is never wired
//! into the HTTP layer outside of tests.

use super::{ListStore, Result, StoreError};
use crate::types::{ListId, Todo, TodoId, TodoList};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    lists: Vec<TodoList>,
    next_list_id: i64,
    next_todo_id: i64,
}

/// Mutex-guarded in-memory list store.
#[derive(Debug, Default)]
pub struct MemoryListStore {
    inner: Mutex<Inner>,
}

impl MemoryListStore {
    /// Creates an empty store with ids starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock means a panicking test; propagate the state
        // rather than masking it.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl ListStore for MemoryListStore {
    async fn find_list(&self, id: ListId) -> Result<TodoList> {
        self.lock()
            .lists
            .iter()
            .find(|list| list.id == id)
            .cloned()
            .ok_or(StoreError::ListNotFound(id))
    }

    async fn all_lists(&self) -> Result<Vec<TodoList>> {
        Ok(self.lock().lists.clone())
    }

    async fn create_list(&self, name: &str) -> Result<()> {
        let mut inner = self.lock();
        inner.next_list_id += 1;
        let id = ListId::new(inner.next_list_id);
        inner.lists.push(TodoList {
            id,
            name: name.to_string(),
            todos: Vec::new(),
        });
        Ok(())
    }

    async fn rename_list(&self, id: ListId, new_name: &str) -> Result<()> {
        let mut inner = self.lock();
        if let Some(list) = inner.lists.iter_mut().find(|list| list.id == id) {
            list.name = new_name.to_string();
        }
        Ok(())
    }

    async fn delete_list(&self, id: ListId) -> Result<()> {
        // Dropping the list drops its todos with it.
        self.lock().lists.retain(|list| list.id != id);
        Ok(())
    }

    async fn create_todo(&self, list_id: ListId, name: &str) -> Result<()> {
        let mut inner = self.lock();
        inner.next_todo_id += 1;
        let id = TodoId::new(inner.next_todo_id);
        if let Some(list) = inner.lists.iter_mut().find(|list| list.id == list_id) {
            list.todos.push(Todo {
                id,
                name: name.to_string(),
                completed: false,
                list_id,
            });
        }
        Ok(())
    }

    async fn delete_todo(&self, list_id: ListId, todo_id: TodoId) -> Result<()> {
        let mut inner = self.lock();
        if let Some(list) = inner.lists.iter_mut().find(|list| list.id == list_id) {
            list.todos.retain(|todo| todo.id != todo_id);
        }
        Ok(())
    }

    async fn set_todo_status(
        &self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> Result<()> {
        let mut inner = self.lock();
        if let Some(list) = inner.lists.iter_mut().find(|list| list.id == list_id) {
            if let Some(todo) = list.todos.iter_mut().find(|todo| todo.id == todo_id) {
                todo.completed = completed;
            }
        }
        Ok(())
    }

    async fn mark_all_complete(&self, list_id: ListId) -> Result<()> {
        let mut inner = self.lock();
        if let Some(list) = inner.lists.iter_mut().find(|list| list.id == list_id) {
            for todo in &mut list.todos {
                todo.completed = true;
            }
        }
        Ok(())
    }
}
