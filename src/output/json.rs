//! JSON output helpers.
//!
//! Provides the error-object and report formatters used by all `--json`
//! code paths.

use anyhow::{Context, Result};

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
/// Returns an error if JSON serialization fails (should not happen in
/// practice — `serde_json` only fails on non-finite floats and maps with
/// non-string keys, neither of which appear here).
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a successful installation report: status, host, installed names.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_report(host: &str, installed: &[String]) -> Result<String> {
    let obj = serde_json::json!({
        "status": "installed",
        "host": host,
        "installed": installed,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
