//! Router composition.
//!
//! Wires every handler to its route and installs the session and
//! tracing layers. Tests build the same router over the in-memory
//! store.

use crate::handlers::{home, lists, todos};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

/// Builds the application router.
///
/// # Routes
///
/// - `GET /`: redirect to `/lists`
/// - `GET /lists`: list index
/// - `GET /lists/new`: creation form
/// - `POST /lists`: create a list
/// - `GET /lists/:id`: one list
/// - `GET /lists/:id/edit`: rename form
/// - `POST /lists/:id`: rename a list
/// - `POST /lists/:id/destroy`: delete a list
/// - `POST /lists/:id/complete_all`: mark every todo complete
/// - `POST /lists/:list_id/todos`: add a todo
/// - `POST /lists/:list_id/todos/:id`: set a todo's status
/// - `POST /lists/:list_id/todos/:id/destroy`: delete a todo
#[must_use]
pub fn router(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        .route("/", get(home))
        .route("/lists", get(lists::index).post(lists::create))
        .route("/lists/new", get(lists::new_form))
        .route("/lists/:id", get(lists::show).post(lists::update))
        .route("/lists/:id/edit", get(lists::edit_form))
        .route("/lists/:id/destroy", post(lists::destroy))
        .route("/lists/:id/complete_all", post(lists::complete_all))
        .route("/lists/:list_id/todos", post(todos::create))
        .route("/lists/:list_id/todos/:id", post(todos::set_status))
        .route("/lists/:list_id/todos/:id/destroy", post(todos::destroy))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
