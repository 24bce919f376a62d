//! Persistence gateway for todo lists.
//!
//! The [`ListStore`] trait is the sole mediator between the HTTP layer
//! and durable state; no other component issues queries. The
//! production implementation is [`PgListStore`]; the in-memory
//! [`MemoryListStore`] exists purely as a test double behind the
//! `test-utils` feature.

mod postgres;

#[cfg(any(test, feature = "test-utils"))]
mod memory;

pub use postgres::PgListStore;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryListStore;

use crate::types::{ListId, TodoId, TodoList};
use async_trait::async_trait;
use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures surfaced by the persistence gateway.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No list exists with the requested id.
    #[error("list {0} not found")]
    ListNotFound(ListId),

    /// The underlying store failed (connectivity, constraint
    /// violation). Not retried; propagates to the caller.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The persistence gateway contract.
///
/// Each operation is a single round trip to the store unless noted.
/// Mutations take caller-validated input; the store assigns all ids.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Fetches one list and its items (a second query), in insertion
    /// order.
    ///
    /// # Errors
    ///
    /// [`StoreError::ListNotFound`] when no list row matches.
    async fn find_list(&self, id: ListId) -> Result<TodoList>;

    /// Fetches every list with its items, in the order lists were
    /// created. One query per list for items; the ordering is an
    /// observable contract, the query count is not.
    async fn all_lists(&self) -> Result<Vec<TodoList>>;

    /// Inserts a new, empty list. The id is store-assigned.
    async fn create_list(&self, name: &str) -> Result<()>;

    /// Updates the name of the matching list.
    ///
    /// A missing id matches zero rows and is a silent no-op.
    async fn rename_list(&self, id: ListId, new_name: &str) -> Result<()>;

    /// Deletes the list row. Cascading deletion of its todos is the
    /// schema's responsibility. A missing id is a no-op.
    async fn delete_list(&self, id: ListId) -> Result<()>;

    /// Inserts a todo row owned by `list_id`, completed = false.
    async fn create_todo(&self, list_id: ListId, name: &str) -> Result<()>;

    /// Deletes the todo matching both ids. Scoping by `list_id` keeps
    /// an id collision from deleting across lists.
    async fn delete_todo(&self, list_id: ListId, todo_id: TodoId) -> Result<()>;

    /// Sets one todo's completed flag, scoped by both ids.
    async fn set_todo_status(
        &self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> Result<()>;

    /// Marks every todo under `list_id` complete in one statement.
    async fn mark_all_complete(&self, list_id: ListId) -> Result<()>;
}
