//! Shared state for HTTP handlers.

use crate::store::ListStore;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Holds the persistence gateway behind a trait object so tests can
/// substitute the in-memory store for the PostgreSQL one.
#[derive(Clone)]
pub struct AppState {
    /// The persistence gateway.
    pub store: Arc<dyn ListStore>,
}

impl AppState {
    /// Creates state over any gateway implementation.
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }
}
