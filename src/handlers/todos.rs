//! Handlers for todo items within a list.

use super::{is_xhr, load_list};
use crate::error::Result;
use crate::flash::Flash;
use crate::state::AppState;
use crate::types::{ListId, TodoId};
use crate::validation::validate_todo_name;
use crate::views;
use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

/// Form payload for adding a todo.
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    /// The proposed todo name, trimmed by the handler.
    pub todo: String,
}

/// Form payload for setting a todo's status.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    /// `"true"` marks the todo complete; anything else marks it
    /// incomplete.
    pub completed: String,
}

/// `POST /lists/:list_id/todos`: add a todo, or re-render the list
/// view with the validation error.
pub async fn create(
    State(state): State<AppState>,
    flash: Flash,
    Path(list_id): Path<i64>,
    Form(form): Form<TodoForm>,
) -> Result<Response> {
    let list_id = ListId::new(list_id);
    let list = load_list(&state, &flash, list_id).await?;
    let todo_name = form.todo.trim();

    if let Err(err) = validate_todo_name(todo_name) {
        flash.set_error(err.to_string()).await?;
        let messages = flash.take().await?;
        return Ok(views::list_page(&list, &messages).into_response());
    }

    state.store.create_todo(list_id, todo_name).await?;
    flash.set_success("The todo was added.").await?;
    Ok(Redirect::to(&format!("/lists/{list_id}")).into_response())
}

/// `POST /lists/:list_id/todos/:id/destroy`: delete a todo.
///
/// The XHR path answers 204 No Content and leaves the flash untouched;
/// the page removes the row itself.
pub async fn destroy(
    State(state): State<AppState>,
    flash: Flash,
    headers: HeaderMap,
    Path((list_id, todo_id)): Path<(i64, i64)>,
) -> Result<Response> {
    let list_id = ListId::new(list_id);
    load_list(&state, &flash, list_id).await?;

    state.store.delete_todo(list_id, TodoId::new(todo_id)).await?;

    if is_xhr(&headers) {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        flash.set_success("The todo has been deleted.").await?;
        Ok(Redirect::to(&format!("/lists/{list_id}")).into_response())
    }
}

/// `POST /lists/:list_id/todos/:id`: set a todo's completed status.
pub async fn set_status(
    State(state): State<AppState>,
    flash: Flash,
    Path((list_id, todo_id)): Path<(i64, i64)>,
    Form(form): Form<StatusForm>,
) -> Result<Response> {
    let list_id = ListId::new(list_id);
    load_list(&state, &flash, list_id).await?;

    let completed = form.completed == "true";
    state
        .store
        .set_todo_status(list_id, TodoId::new(todo_id), completed)
        .await?;
    flash.set_success("The todo has been updated.").await?;
    Ok(Redirect::to(&format!("/lists/{list_id}")).into_response())
}
