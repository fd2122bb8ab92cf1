//! Install command — flag-driven or interactive adapter over the engine.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{Input, Password};

use crate::application::ports::DEFAULT_TIMEOUT;
use crate::application::services::{InstallReport, install};
use crate::commands::report_result;
use crate::domain::catalog::Catalog;
use crate::domain::credentials::{Credentials, DEFAULT_SSH_PORT};
use crate::domain::selection;
use crate::infra::ssh::SshConnector;
use crate::output::OutputContext;

/// Arguments for the install command.
#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("auth")
        .required(true)
        .args(["password", "key_file", "ask_password"]),
))]
pub struct InstallArgs {
    /// Remote server hostname or IP
    #[arg(long)]
    pub host: String,

    /// SSH port
    #[arg(long, default_value_t = DEFAULT_SSH_PORT)]
    pub port: u16,

    /// SSH username
    #[arg(long)]
    pub username: String,

    /// SSH password (also piped to sudo on the remote host)
    #[arg(long)]
    pub password: Option<String>,

    /// Path to a private key file for SSH auth
    #[arg(long)]
    pub key_file: Option<PathBuf>,

    /// Prompt securely for the SSH password instead of passing --password
    /// in shell history
    #[arg(long)]
    pub ask_password: bool,

    /// Comma-separated software names from the catalog; omit for the
    /// interactive chooser
    #[arg(long)]
    pub software: Option<String>,

    /// Connect and command timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,
}

/// Run the install command.
///
/// # Errors
///
/// Returns an error for invalid selections or credentials (before any
/// connection attempt) and for any engine failure.
pub fn run(ctx: &OutputContext, args: InstallArgs, json_mode: bool) -> Result<()> {
    let catalog = Catalog::default();
    report_result(ctx, json_mode, execute(ctx, args, &catalog))
}

fn execute(ctx: &OutputContext, args: InstallArgs, catalog: &Catalog) -> Result<InstallReport> {
    let names = match &args.software {
        Some(raw) => selection::resolve_by_name(raw.split(','), catalog)?,
        None => interactive_software_choice(ctx, catalog)?,
    };

    let password = if args.ask_password {
        let entered = Password::new()
            .with_prompt("SSH password")
            .interact()
            .context("reading password")?;
        Some(entered)
    } else {
        args.password
    };

    let credentials = Credentials::new(
        args.host,
        args.port,
        args.username,
        password,
        args.key_file,
    )?;

    ctx.info(&format!(
        "Installing {} on {}",
        names.join(", "),
        credentials.host()
    ));

    let report = install(
        &SshConnector,
        &credentials,
        &names,
        catalog,
        Duration::from_secs(args.timeout),
    )?;
    Ok(report)
}

/// Numbered catalog listing plus a comma-separated index prompt.
fn interactive_software_choice(ctx: &OutputContext, catalog: &Catalog) -> Result<Vec<String>> {
    ctx.header("Available software:");
    let options: Vec<&str> = catalog.names().collect();
    for (i, name) in options.iter().enumerate() {
        println!("  {}. {name}", i + 1);
    }

    let raw: String = Input::new()
        .with_prompt("Select software by number (comma-separated, e.g. 1,3,5)")
        .interact_text()
        .context("reading selection")?;

    let indices = selection::resolve_by_index(&raw, options.len())?;
    if indices.is_empty() {
        return Err(crate::domain::error::InstallError::EmptySelection.into());
    }
    Ok(indices.iter().map(|i| options[i - 1].to_string()).collect())
}
