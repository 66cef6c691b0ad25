use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::NotificationKind;

/// A staff notification.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    /// Set when the notification concerns a specific case.
    pub case_id: Option<String>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
