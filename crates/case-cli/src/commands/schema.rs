use schemars::{Schema, schema_for};
use serde_json::json;

use case_core::entities::{CaseAnalytics, CaseRow, Notification, SavedFilterRecord, UserCase};
use case_core::filter::{CaseFilterRequest, FilterCriteria};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Names accepted by `csd schema`, with aliases for the common shorthand.
const KNOWN_TYPES: &[&str] = &[
    "filter-criteria",
    "filter-request",
    "case-row",
    "user-case",
    "saved-filter",
    "notification",
    "analytics",
];

/// Handle `csd schema`.
///
/// Dumps the JSON Schema for a wire type so backend contract changes can
/// be diffed against what this client actually sends and parses.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let name = args.type_name.trim().to_lowercase().replace('_', "-");

    if name == "list" {
        return output(&json!({ "types": KNOWN_TYPES }), flags.format);
    }

    let schema = schema_for_name(&name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema type '{}'; known types: {}",
            args.type_name,
            KNOWN_TYPES.join(", ")
        )
    })?;

    output(&schema, flags.format)
}

fn schema_for_name(name: &str) -> Option<Schema> {
    match name {
        "filter-criteria" | "criteria" | "filter" => Some(schema_for!(FilterCriteria)),
        "filter-request" | "request" => Some(schema_for!(CaseFilterRequest)),
        "case-row" | "case" => Some(schema_for!(CaseRow)),
        "user-case" => Some(schema_for!(UserCase)),
        "saved-filter" => Some(schema_for!(SavedFilterRecord)),
        "notification" => Some(schema_for!(Notification)),
        "analytics" => Some(schema_for!(CaseAnalytics)),
        _ => None,
    }
}
