use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::filter::FilterCriteria;

/// Name-keyed map of saved filters. Ordered so listings are stable.
pub type SavedFilters = BTreeMap<String, SavedFilterRecord>;

/// A saved filter as stored server-side, minus its name (the map key).
///
/// Re-saving an existing name overwrites the record silently; last write
/// wins. The client never caches this map, every listing refetches.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SavedFilterRecord {
    pub criteria: FilterCriteria,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
