//! End-to-end handler tests over the in-memory store.
//!
//! Cookies are persisted across requests so flash messages survive the
//! redirect they are meant to cross.

use axum_test::{TestServer, TestServerConfig};
use http::header::{HeaderName, HeaderValue};
use http::StatusCode;
use std::sync::Arc;
use todos_web::store::MemoryListStore;
use todos_web::{router, AppState};

fn server() -> TestServer {
    let state = AppState::new(Arc::new(MemoryListStore::new()));
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(router(state), config).expect("failed to start test server")
}

fn xhr_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-requested-with"),
        HeaderValue::from_static("XMLHttpRequest"),
    )
}

#[tokio::test]
async fn root_redirects_to_the_list_index() {
    let server = server();
    let response = server.get("/").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/lists");
}

#[tokio::test]
async fn creating_a_list_redirects_and_flashes_once() {
    let server = server();

    let response = server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/lists");

    // The flash rides the redirect, shows once, and is gone.
    let index = server.get("/lists").await;
    index.assert_status_ok();
    index.assert_text_contains("The list has been created");
    index.assert_text_contains("Groceries");

    let again = server.get("/lists").await;
    assert!(!again.text().contains("The list has been created"));
}

#[tokio::test]
async fn invalid_list_name_rerenders_the_form_with_the_error() {
    let server = server();

    let response = server.post("/lists").form(&[("list_name", "   ")]).await;
    response.assert_status_ok();
    response.assert_text_contains("List name must be between 1 and 100 characters.");

    let too_long = "a".repeat(101);
    let response = server
        .post("/lists")
        .form(&[("list_name", too_long.as_str())])
        .await;
    response.assert_status_ok();
    response.assert_text_contains("List name must be between 1 and 100 characters.");
}

#[tokio::test]
async fn duplicate_list_name_rerenders_with_uniqueness_error() {
    let server = server();
    server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;

    let response = server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;
    response.assert_status_ok();
    response.assert_text_contains("List name must be unique.");

    // Exact match only: a different case is a different name.
    let response = server
        .post("/lists")
        .form(&[("list_name", "groceries")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn surrounding_whitespace_is_trimmed_before_validation() {
    let server = server();
    server
        .post("/lists")
        .form(&[("list_name", "  Groceries  ")])
        .await;

    let index = server.get("/lists").await;
    index.assert_text_contains(">Groceries<");

    // The trimmed name collides with the stored one.
    let response = server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;
    response.assert_text_contains("List name must be unique.");
}

#[tokio::test]
async fn missing_list_redirects_with_not_found_flash() {
    let server = server();

    let response = server.get("/lists/99").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/lists");

    let index = server.get("/lists").await;
    index.assert_text_contains("The specified list was not found.");
}

#[tokio::test]
async fn renaming_a_list_updates_it_in_place() {
    let server = server();
    server.post("/lists").form(&[("list_name", "Chores")]).await;

    let response = server
        .post("/lists/1")
        .form(&[("list_name", "Weekend Chores")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/lists/1");

    let page = server.get("/lists/1").await;
    page.assert_text_contains("Weekend Chores");
    page.assert_text_contains("The list has been updated.");
}

#[tokio::test]
async fn grocery_scenario_shows_items_in_insertion_order() {
    let server = server();
    server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;
    server
        .post("/lists/1/todos")
        .form(&[("todo", "Milk")])
        .await;
    server
        .post("/lists/1/todos")
        .form(&[("todo", "Eggs")])
        .await;

    // Toggle "Milk" (first todo, id 1) complete.
    server
        .post("/lists/1/todos/1")
        .form(&[("completed", "true")])
        .await;

    let page = server.get("/lists/1").await;
    page.assert_status_ok();
    let text = page.text();
    let milk = text.find("Milk").expect("Milk missing");
    let eggs = text.find("Eggs").expect("Eggs missing");
    assert!(milk < eggs, "insertion order not preserved");
    page.assert_text_contains("The todo has been updated.");
}

#[tokio::test]
async fn invalid_todo_name_rerenders_the_list_view() {
    let server = server();
    server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;

    let response = server.post("/lists/1/todos").form(&[("todo", "")]).await;
    response.assert_status_ok();
    response.assert_text_contains("Todo must be between 1 and 100 characters.");
}

#[tokio::test]
async fn complete_all_marks_every_todo_done() {
    let server = server();
    server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;
    server
        .post("/lists/1/todos")
        .form(&[("todo", "Milk")])
        .await;
    server
        .post("/lists/1/todos")
        .form(&[("todo", "Eggs")])
        .await;

    let response = server.post("/lists/1/complete_all").await;
    response.assert_status(StatusCode::SEE_OTHER);

    let page = server.get("/lists/1").await;
    page.assert_text_contains("All todos have been completed.");

    let index = server.get("/lists").await;
    index.assert_text_contains("2/2");
}

#[tokio::test]
async fn list_destroy_answers_xhr_with_the_bare_path() {
    let server = server();
    server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;

    let (name, value) = xhr_header();
    let response = server.post("/lists/1/destroy").add_header(name, value).await;
    response.assert_status_ok();
    assert_eq!(response.text(), "/lists");

    let index = server.get("/lists").await;
    assert!(!index.text().contains("Groceries"));
}

#[tokio::test]
async fn list_destroy_without_xhr_redirects_with_flash() {
    let server = server();
    server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;

    let response = server.post("/lists/1/destroy").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/lists");

    let index = server.get("/lists").await;
    index.assert_text_contains("The list has been deleted.");
}

#[tokio::test]
async fn destroying_a_missing_list_is_a_noop() {
    let server = server();
    server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;

    let response = server.post("/lists/99/destroy").await;
    response.assert_status(StatusCode::SEE_OTHER);

    let index = server.get("/lists").await;
    index.assert_text_contains("Groceries");
}

#[tokio::test]
async fn todo_destroy_answers_xhr_with_no_content() {
    let server = server();
    server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;
    server
        .post("/lists/1/todos")
        .form(&[("todo", "Milk")])
        .await;

    let (name, value) = xhr_header();
    let response = server
        .post("/lists/1/todos/1/destroy")
        .add_header(name, value)
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let page = server.get("/lists/1").await;
    assert!(!page.text().contains("Milk"));
}

#[tokio::test]
async fn todo_destroy_without_xhr_redirects_with_flash() {
    let server = server();
    server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;
    server
        .post("/lists/1/todos")
        .form(&[("todo", "Milk")])
        .await;

    let response = server.post("/lists/1/todos/1/destroy").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/lists/1");

    let page = server.get("/lists/1").await;
    page.assert_text_contains("The todo has been deleted.");
}

#[tokio::test]
async fn toggling_back_to_incomplete_round_trips() {
    let server = server();
    server
        .post("/lists")
        .form(&[("list_name", "Groceries")])
        .await;
    server
        .post("/lists/1/todos")
        .form(&[("todo", "Milk")])
        .await;

    server
        .post("/lists/1/todos/1")
        .form(&[("completed", "true")])
        .await;
    server
        .post("/lists/1/todos/1")
        .form(&[("completed", "false")])
        .await;

    let index = server.get("/lists").await;
    index.assert_text_contains("0/1");
}
