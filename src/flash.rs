//! Session-backed flash messages.
//!
//! Each user session carries at most one success and one error
//! message. Setting a message overwrites the previous one of the same
//! kind; nothing appends. The channel does no time-based clearing;
//! a message sits in the session until the next full-page render takes
//! it or the next operation overwrites it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use tower_sessions::Session;

const SUCCESS_KEY: &str = "flash.success";
const ERROR_KEY: &str = "flash.error";

/// Result type alias for flash operations.
pub type Result<T> = std::result::Result<T, tower_sessions::session::Error>;

/// The pending flash messages of one session.
///
/// Extracted per request; requires the session layer to be installed
/// on the router.
#[derive(Debug, Clone)]
pub struct Flash {
    session: Session,
}

impl Flash {
    /// Wraps an extracted session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Stores `message` as the session's success message, replacing
    /// any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the session store fails.
    pub async fn set_success(&self, message: impl Into<String>) -> Result<()> {
        self.session.insert(SUCCESS_KEY, message.into()).await
    }

    /// Stores `message` as the session's error message, replacing any
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the session store fails.
    pub async fn set_error(&self, message: impl Into<String>) -> Result<()> {
        self.session.insert(ERROR_KEY, message.into()).await
    }

    /// Takes both pending messages, leaving the session clean.
    ///
    /// Called by full-page rendering; the messages are considered
    /// consumed once displayed.
    ///
    /// # Errors
    ///
    /// Returns an error when the session store fails.
    pub async fn take(&self) -> Result<Messages> {
        Ok(Messages {
            success: self.session.remove::<String>(SUCCESS_KEY).await?,
            error: self.session.remove::<String>(ERROR_KEY).await?,
        })
    }
}

/// Messages taken from the flash channel for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    /// Pending success message, if any.
    pub success: Option<String>,
    /// Pending error message, if any.
    pub error: Option<String>,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self::new(session))
    }
}
