//! API error types.

use thiserror::Error;

/// Errors that can occur when talking to the claims backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Server-provided detail, or the raw response body.
        message: String,
    },

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The session is expired; the backend was not (or no longer) consulted.
    #[error("session expired")]
    SessionExpired,

    /// Client-side validation rejected the request before sending.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// Collapse any error into a single sentence fit for end users.
    ///
    /// Transport and parse details stay in the `Display`/log output; this
    /// is what the CLI prints on stderr.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) => {
                "Could not reach the claims backend. Check your connection and try again."
                    .to_string()
            }
            Self::Api { status, message } => {
                if message.trim().is_empty() {
                    format!("The claims backend rejected the request (status {status}).")
                } else {
                    message.clone()
                }
            }
            Self::Parse(_) => "The claims backend returned an unexpected response.".to_string(),
            Self::SessionExpired => {
                "Your session has expired. Run `csd auth login` to sign in again.".to_string()
            }
            Self::Validation(message) => message.clone(),
        }
    }
}
