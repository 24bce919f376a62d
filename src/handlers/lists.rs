//! Handlers for todo lists.

use super::{is_xhr, load_list};
use crate::error::Result;
use crate::flash::Flash;
use crate::state::AppState;
use crate::types::ListId;
use crate::validation::validate_list_name;
use crate::views;
use axum::extract::{Form, Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

/// Form payload for creating or renaming a list.
#[derive(Debug, Deserialize)]
pub struct ListNameForm {
    /// The proposed list name, trimmed by the handler.
    pub list_name: String,
}

/// `GET /lists`: the list index.
pub async fn index(State(state): State<AppState>, flash: Flash) -> Result<Response> {
    let lists = state.store.all_lists().await?;
    let messages = flash.take().await?;
    Ok(views::lists_page(&lists, &messages).into_response())
}

/// `GET /lists/new`: the creation form.
pub async fn new_form(flash: Flash) -> Result<Response> {
    let messages = flash.take().await?;
    Ok(views::new_list_page(&messages, "").into_response())
}

/// `POST /lists`: create a list, or re-render the form with the
/// validation error.
pub async fn create(
    State(state): State<AppState>,
    flash: Flash,
    Form(form): Form<ListNameForm>,
) -> Result<Response> {
    let list_name = form.list_name.trim();

    let existing = state.store.all_lists().await?;
    if let Err(err) = validate_list_name(list_name, &existing) {
        flash.set_error(err.to_string()).await?;
        let messages = flash.take().await?;
        return Ok(views::new_list_page(&messages, list_name).into_response());
    }

    state.store.create_list(list_name).await?;
    flash.set_success("The list has been created").await?;
    Ok(Redirect::to("/lists").into_response())
}

/// `GET /lists/:id`: a single list.
pub async fn show(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response> {
    let list = load_list(&state, &flash, ListId::new(id)).await?;
    let messages = flash.take().await?;
    Ok(views::list_page(&list, &messages).into_response())
}

/// `GET /lists/:id/edit`: the rename form.
pub async fn edit_form(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response> {
    let list = load_list(&state, &flash, ListId::new(id)).await?;
    let messages = flash.take().await?;
    let name = list.name.clone();
    Ok(views::edit_list_page(&list, &messages, &name).into_response())
}

/// `POST /lists/:id`: rename a list, or re-render the form with the
/// validation error.
pub async fn update(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i64>,
    Form(form): Form<ListNameForm>,
) -> Result<Response> {
    let list_id = ListId::new(id);
    let list = load_list(&state, &flash, list_id).await?;
    let list_name = form.list_name.trim();

    let existing = state.store.all_lists().await?;
    if let Err(err) = validate_list_name(list_name, &existing) {
        flash.set_error(err.to_string()).await?;
        let messages = flash.take().await?;
        return Ok(views::edit_list_page(&list, &messages, list_name).into_response());
    }

    state.store.rename_list(list_id, list_name).await?;
    flash.set_success("The list has been updated.").await?;
    Ok(Redirect::to(&format!("/lists/{list_id}")).into_response())
}

/// `POST /lists/:id/destroy`: delete a list.
///
/// The in-page JavaScript sends `X-Requested-With: XMLHttpRequest` and
/// expects the bare path to navigate to instead of a redirect.
pub async fn destroy(
    State(state): State<AppState>,
    flash: Flash,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Response> {
    state.store.delete_list(ListId::new(id)).await?;
    flash.set_success("The list has been deleted.").await?;

    if is_xhr(&headers) {
        Ok("/lists".into_response())
    } else {
        Ok(Redirect::to("/lists").into_response())
    }
}

/// `POST /lists/:id/complete_all`: mark every todo in a list
/// complete.
pub async fn complete_all(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response> {
    let list_id = ListId::new(id);
    load_list(&state, &flash, list_id).await?;

    state.store.mark_all_complete(list_id).await?;
    flash.set_success("All todos have been completed.").await?;
    Ok(Redirect::to(&format!("/lists/{list_id}")).into_response())
}
