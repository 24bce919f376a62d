//! Server-side HTML rendering.
//!
//! Pure functions from domain structures to pages, built with maud's
//! auto-escaping `html!` markup. Display ordering is decided here:
//! fully completed lists and completed todos sort to the front, ties
//! keep insertion order.

use crate::flash::Messages;
use crate::types::{Todo, TodoList};
use axum::response::Html;
use maud::{html, Markup, DOCTYPE};

/// Displays completed-out-of-total for a list, e.g. `2/5`.
#[must_use]
pub fn completion_display(list: &TodoList) -> String {
    format!("{}/{}", list.completed_count(), list.len())
}

/// Orders lists for display: fully completed lists first, then the
/// rest in insertion order.
#[must_use]
pub fn sorted_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    let mut sorted: Vec<&TodoList> = lists.iter().collect();
    sorted.sort_by_key(|list| usize::from(!list.all_complete()));
    sorted
}

/// Orders a list's todos for display: completed first, then the rest
/// in insertion order.
#[must_use]
pub fn sorted_todos(list: &TodoList) -> Vec<&Todo> {
    let mut sorted: Vec<&Todo> = list.todos.iter().collect();
    sorted.sort_by_key(|todo| usize::from(!todo.completed));
    sorted
}

fn layout(title: &str, messages: &Messages, body: Markup) -> Html<String> {
    let page = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                @if let Some(error) = &messages.error {
                    div class="flash error" { (error) }
                }
                @if let Some(success) = &messages.success {
                    div class="flash success" { (success) }
                }
                (body)
            }
        }
    };
    Html(page.into_string())
}

/// The list index: every list with its completion count.
#[must_use]
pub fn lists_page(lists: &[TodoList], messages: &Messages) -> Html<String> {
    let body = html! {
        h1 { "Todo Lists" }
        ul class="lists" {
            @for list in sorted_lists(lists) {
                li class=[list.all_complete().then_some("complete")] {
                    a href={ "/lists/" (list.id) } { (list.name) }
                    " "
                    span { (completion_display(list)) }
                }
            }
        }
        a href="/lists/new" { "New List" }
    };
    layout("Todo Lists", messages, body)
}

/// The form for creating a list, pre-filled with the rejected name on
/// re-render.
#[must_use]
pub fn new_list_page(messages: &Messages, list_name: &str) -> Html<String> {
    let body = html! {
        h1 { "New Todo List" }
        form action="/lists" method="post" {
            label for="list_name" { "Enter the name for your new list:" }
            input name="list_name" id="list_name" value=(list_name);
            button type="submit" { "Save" }
        }
    };
    layout("New Todo List", messages, body)
}

/// The form for renaming a list, plus its delete control.
#[must_use]
pub fn edit_list_page(list: &TodoList, messages: &Messages, list_name: &str) -> Html<String> {
    let body = html! {
        h1 { "Editing " (list.name) }
        form action={ "/lists/" (list.id) } method="post" {
            label for="list_name" { "Enter the new name for the list:" }
            input name="list_name" id="list_name" value=(list_name);
            button type="submit" { "Save" }
        }
        form action={ "/lists/" (list.id) "/destroy" } method="post" {
            button type="submit" class="delete" { "Delete List" }
        }
    };
    layout("Edit Todo List", messages, body)
}

/// A single list: its todos with toggle and delete controls, the
/// add-todo form, and the complete-all control.
#[must_use]
pub fn list_page(list: &TodoList, messages: &Messages) -> Html<String> {
    let body = html! {
        h1 { (list.name) }
        a href={ "/lists/" (list.id) "/edit" } { "Edit List" }
        ul class="todos" {
            @for todo in sorted_todos(list) {
                li class=[todo.completed.then_some("complete")] {
                    form action={ "/lists/" (list.id) "/todos/" (todo.id) }
                        method="post" class="toggle" {
                        input type="hidden" name="completed" value=(!todo.completed);
                        button type="submit" {
                            @if todo.completed { "Undo" } @else { "Complete" }
                        }
                    }
                    span { (todo.name) }
                    form action={ "/lists/" (list.id) "/todos/" (todo.id) "/destroy" }
                        method="post" class="delete" {
                        button type="submit" { "Delete" }
                    }
                }
            }
        }
        form action={ "/lists/" (list.id) "/complete_all" } method="post" {
            button type="submit" { "Complete All" }
        }
        form action={ "/lists/" (list.id) "/todos" } method="post" {
            label for="todo" { "Enter a new todo item:" }
            input name="todo" id="todo";
            button type="submit" { "Add" }
        }
    };
    layout(&list.name, messages, body)
}
