//! JSON output helpers.
//!
//! Provides the result and error object formatters used by all `--json`
//! code paths.

use anyhow::{Context, Result};

use crate::application::apply::Outcome;
use crate::domain::plan::Plan;

/// Format a successful run result.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "changed": true,
///   "failed": false,
///   "msg": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails (should not happen in
/// practice — `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_outcome(outcome: &Outcome) -> Result<String> {
    let obj = serde_json::json!({
        "changed": outcome.changed,
        "failed": false,
        "msg": outcome.msg(),
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a dry-run plan as a JSON action list.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_plan(plan: &Plan) -> Result<String> {
    let actions: Vec<String> = plan.actions.iter().map(crate::domain::plan::Action::describe).collect();
    let obj = serde_json::json!({
        "changed": !plan.is_empty(),
        "actions": actions,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
