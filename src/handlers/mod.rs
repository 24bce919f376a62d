//! HTTP request handlers.
//!
//! Every mutating handler follows the same shape: trim the form input,
//! run one validation, invoke one gateway operation, set a flash
//! message, then redirect or re-render. Handlers that operate on an
//! existing list load it first through [`load_list`].

pub mod lists;
pub mod todos;

use crate::error::Result;
use crate::flash::Flash;
use crate::state::AppState;
use crate::store::StoreError;
use crate::types::{ListId, TodoList};
use axum::http::HeaderMap;
use axum::response::Redirect;

/// Redirects the site root to the list index.
pub async fn home() -> Redirect {
    Redirect::to("/lists")
}

/// True when the request came from the in-page JavaScript rather than
/// a plain form submission.
pub(crate) fn is_xhr(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|value| value.to_str().ok())
        == Some("XMLHttpRequest")
}

/// Loads a list, flashing "not found" for a missing id.
///
/// The not-found error propagates out of the handler and turns into a
/// redirect to the index, so the flashed message is shown on the next
/// page.
pub(crate) async fn load_list(state: &AppState, flash: &Flash, id: ListId) -> Result<TodoList> {
    match state.store.find_list(id).await {
        Ok(list) => Ok(list),
        Err(err @ StoreError::ListNotFound(_)) => {
            flash.set_error("The specified list was not found.").await?;
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
