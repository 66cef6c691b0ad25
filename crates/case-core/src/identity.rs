use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::StaffRole;
use crate::permissions::Permissions;

/// Lightweight authenticated staff identity for cross-crate passing.
///
/// Produced by `case-auth` from token claims, consumed by `case-cli` for
/// display and permission gating. Data fields only, no auth logic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StaffIdentity {
    /// Backend user ID (from the token `sub` claim).
    pub user_id: String,
    pub email: Option<String>,
    pub role: StaffRole,
    /// Effective permission bits, already masked and role-defaulted.
    pub permissions: Permissions,
}
