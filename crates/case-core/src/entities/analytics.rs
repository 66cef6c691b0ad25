use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CaseStatus, TimeRange};

/// Aggregate case metrics for one reporting window.
///
/// Deserialization is tolerant: the analytics endpoint has grown fields
/// over time, so everything defaults rather than failing the whole fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct CaseAnalytics {
    pub time_range: TimeRange,
    pub total_cases: u64,
    pub status_counts: Vec<StatusCount>,
    pub average_ai_score: Option<f64>,
    pub total_estimated_amount: f64,
}

/// Case count for a single status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusCount {
    pub status: CaseStatus,
    pub count: u64,
}
