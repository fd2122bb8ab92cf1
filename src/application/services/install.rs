//! Installation orchestration: connect, detect, synthesize, execute, close.

use std::time::Duration;

use serde::Serialize;

use crate::application::ports::{CommandChannel, Connector};
use crate::application::services::detect::detect_package_manager;
use crate::domain::catalog::Catalog;
use crate::domain::command::synthesize;
use crate::domain::credentials::Credentials;
use crate::domain::error::InstallError;

/// Successful installation summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    /// Host the software was installed on.
    pub host: String,
    /// Display names that were installed, in request order.
    pub installed: Vec<String>,
}

/// Run one best-effort installation pass on a single host.
///
/// Validation failures are raised before any connection attempt. Once a
/// session is open it is closed exactly once on every exit path, success or
/// failure. No step is retried; a caller that wants a retry starts over
/// with a fresh connection and a fresh probe.
///
/// # Errors
///
/// Returns [`InstallError::EmptySelection`] for an empty name list,
/// [`InstallError::ConnectionError`] if the session cannot be opened,
/// [`InstallError::UnsupportedDistribution`] if no recognized package
/// manager is found, and [`InstallError::CommandExecutionFailed`] (with the
/// verbatim exit code, stdout, and stderr) if the install command exits
/// non-zero.
pub fn install(
    connector: &impl Connector,
    credentials: &Credentials,
    display_names: &[String],
    catalog: &Catalog,
    timeout: Duration,
) -> Result<InstallReport, InstallError> {
    if display_names.is_empty() {
        return Err(InstallError::EmptySelection);
    }

    // Selections reach this point already catalog-validated by the
    // resolver; a miss here is an internal consistency fault, not a
    // user error.
    let packages = display_names
        .iter()
        .map(|name| {
            catalog.lookup(name).ok_or_else(|| {
                InstallError::Internal(format!(
                    "software name {name:?} bypassed selection validation"
                ))
            })
        })
        .collect::<Result<Vec<&str>, _>>()?;

    let mut channel = connector.connect(credentials, timeout)?;
    let result = run_install(&mut channel, credentials, &packages);
    channel.close();

    result.map(|()| InstallReport {
        host: credentials.host().to_string(),
        installed: display_names.to_vec(),
    })
}

fn run_install(
    channel: &mut impl CommandChannel,
    credentials: &Credentials,
    packages: &[&str],
) -> Result<(), InstallError> {
    let manager = detect_package_manager(channel)?;
    let command = synthesize(manager, packages, credentials.sudo_password());
    let outcome = channel.exec(&command)?;
    if !outcome.success() {
        return Err(InstallError::CommandExecutionFailed {
            exit_code: outcome.exit_code,
            stdout: outcome.stdout,
            stderr: outcome.stderr,
        });
    }
    Ok(())
}
