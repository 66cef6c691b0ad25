//! # case-api
//!
//! HTTP client for the claims backend.
//!
//! One [`ApiClient`] per process, built from configuration. Every call
//! takes the [`case_auth::StaffSession`] explicitly and checks expiry
//! before sending, so an expired session fails fast as
//! [`ApiError::SessionExpired`] without a request on the wire. There are
//! no retries: callers decide whether an operation is worth repeating.
//!
//! Endpoint groups:
//! - [`cases`]: filtered admin listing, claims table, claimant's own cases
//! - [`filters`]: saved filter fetch/save/delete
//! - [`notifications`]: notification fetch and mark-read
//! - [`analytics`]: aggregate case metrics

pub mod analytics;
pub mod cases;
pub mod filters;
pub mod notifications;

mod error;
mod http;

pub use error::ApiError;

/// HTTP client for the claims backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("casedesk/0.1")
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
