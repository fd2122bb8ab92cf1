//! Batch command — the programmatic caller's adapter.
//!
//! Reads the JSON installation request from a file or stdin and funnels it
//! through the same validation and engine as the install command.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use crate::application::ports::DEFAULT_TIMEOUT;
use crate::application::services::{InstallReport, install};
use crate::commands::report_result;
use crate::domain::catalog::Catalog;
use crate::domain::request::InstallRequest;
use crate::infra::ssh::SshConnector;
use crate::output::OutputContext;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Path to a JSON request file; `-` or omitted reads stdin
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Connect and command timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

/// Run the batch command.
///
/// # Errors
///
/// Returns an error if the request cannot be read or parsed, fails
/// validation, or the installation fails.
pub fn run(ctx: &OutputContext, args: BatchArgs, json_mode: bool) -> Result<()> {
    report_result(ctx, json_mode, execute(&args))
}

fn execute(args: &BatchArgs) -> Result<InstallReport> {
    let raw = match &args.file {
        Some(path) if path.as_path() != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("reading request file {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };
    let request: InstallRequest =
        serde_json::from_str(&raw).context("parsing install request")?;

    let catalog = Catalog::default();
    let (credentials, names) = request.validate(&catalog)?;

    let report = install(
        &SshConnector,
        &credentials,
        &names,
        &catalog,
        Duration::from_secs(args.timeout),
    )?;
    Ok(report)
}
