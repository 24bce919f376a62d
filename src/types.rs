//! Domain types for todo lists and their items.
//!
//! A [`TodoList`] is a named, ordered collection of [`Todo`] items. Both
//! carry store-assigned numeric identifiers; the application never
//! invents ids on its own.

use serde::{Deserialize, Serialize};

/// Unique identifier for a todo list, assigned by the store on insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListId(i64);

impl ListId {
    /// Wraps a raw store-assigned id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id for query binding.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a todo item, assigned by the store on insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(i64);

impl TodoId {
    /// Wraps a raw store-assigned id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id for query binding.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item, owned by exactly one list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier.
    pub id: TodoId,
    /// Display name, 1–100 characters.
    pub name: String,
    /// Whether the item is done.
    pub completed: bool,
    /// The owning list.
    pub list_id: ListId,
}

/// A named todo list together with its items, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Store-assigned identifier.
    pub id: ListId,
    /// Display name, 1–100 characters, unique across all lists.
    pub name: String,
    /// Items, ordered by insertion.
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Returns the number of items in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns true when the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of completed items.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// True when the list is non-empty and every item is completed.
    ///
    /// An empty list is not "all complete"; it has nothing done yet.
    #[must_use]
    pub fn all_complete(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|t| t.completed)
    }
}
