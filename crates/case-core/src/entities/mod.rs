//! Entity structs for casedesk domain objects.
//!
//! These mirror the backend's JSON payloads. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` so the same types back the
//! client, the CLI output, and `csd schema`.

mod analytics;
mod case;
mod notification;
mod saved_filter;

pub use analytics::{CaseAnalytics, StatusCount};
pub use case::{CaseRow, UserCase};
pub use notification::Notification;
pub use saved_filter::{SavedFilterRecord, SavedFilters};
