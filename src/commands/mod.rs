//! Command implementations

pub mod batch;
pub mod install;
pub mod list;

use anyhow::Result;

use crate::application::services::InstallReport;
use crate::domain::error::InstallError;
use crate::output::{OutputContext, json};

/// Report an engine result to the user.
///
/// On `--json`, stdout carries exactly one JSON object: the report on
/// success, or the structured error object (with its stable `code`) on
/// failure. The error is still propagated so the process exits non-zero.
pub(crate) fn report_result(
    ctx: &OutputContext,
    json_mode: bool,
    result: Result<InstallReport, anyhow::Error>,
) -> Result<()> {
    match result {
        Ok(report) => {
            if json_mode {
                println!("{}", json::format_report(&report.host, &report.installed)?);
            } else {
                ctx.success(&format!(
                    "Installed on {}: {}",
                    report.host,
                    report.installed.join(", ")
                ));
            }
            Ok(())
        }
        Err(err) => {
            if json_mode {
                println!("{}", json::format_error(&err.to_string(), error_code(&err))?);
            }
            // Human-readable failures are printed once, by main's error path.
            Err(err)
        }
    }
}

/// Stable code for the JSON error object; adapter-layer failures (prompt
/// I/O, unreadable request file) fall back to `internal_error`.
pub(crate) fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<InstallError>()
        .map_or("internal_error", InstallError::code)
}
