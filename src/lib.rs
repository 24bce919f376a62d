//! Server-rendered multi-user todo list web application.
//!
//! Named lists of named, completable items, stored in PostgreSQL and
//! served as plain HTML forms. The crate splits into three layers:
//!
//! - [`store`]: the persistence gateway, the sole mediator between
//!   domain code and the relational store;
//! - [`validation`]: pure input checks run before every mutation;
//! - [`handlers`]: the HTTP contract: trim, validate, one gateway
//!   call, flash, then redirect or re-render.
//!
//! Flash messages ride the session ([`flash`]) across one redirect.
//! Views ([`views`]) are pure functions from domain structures to
//! HTML.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod router;
pub mod state;
pub mod store;
pub mod types;
pub mod validation;
pub mod views;

pub use config::{AppConfig, AppEnv};
pub use error::AppError;
pub use flash::Flash;
pub use router::router;
pub use state::AppState;
pub use store::{ListStore, PgListStore, StoreError};
pub use types::{ListId, Todo, TodoId, TodoList};
pub use validation::{validate_list_name, validate_todo_name, ValidationError};
