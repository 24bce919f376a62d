//! Web-layer error handling.
//!
//! Three kinds of failure reach users, each on its own path:
//!
//! - validation failures ([`crate::validation::ValidationError`]) are
//!   handled inside the handler: error flash plus a re-render of the
//!   originating form, HTTP 200;
//! - a missing list is flashed and redirected to the index by the
//!   handlers' load helper;
//! - store and session failures propagate here as [`AppError`] and
//!   surface as a generic 500. No retries anywhere, and raw error text
//!   never reaches the response body.

use crate::store::StoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

/// Result type alias for web handlers.
pub type Result<T> = std::result::Result<T, AppError>;

/// Failures a handler propagates instead of handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// The persistence gateway failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The session store failed while reading or writing flash state.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // A not-found that escaped the handlers' load helper still
            // lands on the index rather than an error page.
            Self::Store(StoreError::ListNotFound(id)) => {
                tracing::warn!(list_id = %id, "list not found");
                Redirect::to("/lists").into_response()
            }
            Self::Store(StoreError::Database(source)) => {
                tracing::error!(error = %source, "database failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.").into_response()
            }
            Self::Session(source) => {
                tracing::error!(error = %source, "session failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.").into_response()
            }
        }
    }
}
