//! Command synthesis — pure functions from (manager, packages) to the one
//! shell command executed on the remote host.
//!
//! Every interpolated value is shell-quoted individually. The catalog only
//! supplies well-formed package names, but synthesis makes no assumption
//! about its inputs' provenance.

use crate::domain::pkgmgr::PackageManager;

/// Build the non-interactive install command for `manager`.
///
/// apt runs an update first, joined with `&&` so the install only proceeds
/// if the update succeeds. The compound command reports a single exit code;
/// callers must treat it as atomic-or-failed and not infer per-package
/// outcomes.
#[must_use]
pub fn build_install_command(manager: PackageManager, packages: &[&str]) -> String {
    let quoted = packages
        .iter()
        .map(|package| shell_words::quote(package).into_owned())
        .collect::<Vec<_>>()
        .join(" ");

    match manager {
        PackageManager::Apt => format!(
            "DEBIAN_FRONTEND=noninteractive apt-get update && \
             DEBIAN_FRONTEND=noninteractive apt-get install -y {quoted}"
        ),
        PackageManager::Dnf => format!("dnf install -y {quoted}"),
        PackageManager::Yum => format!("yum install -y {quoted}"),
        PackageManager::Zypper => format!("zypper --non-interactive install {quoted}"),
    }
}

/// Wrap an install command for privileged execution.
///
/// With a password, the (quoted) password is piped into `sudo -S` running
/// the install command as a nested shell; the inner command is quoted once
/// and the whole wrapper crosses a second shell boundary, so it is quoted
/// again. Without a password (key auth), escalation is attempted
/// non-interactively with `sudo -n`.
#[must_use]
pub fn escalate(install_command: &str, sudo_password: Option<&str>) -> String {
    match sudo_password {
        Some(password) => format!(
            "bash -lc \"echo {} | sudo -S bash -lc {}\"",
            shell_words::quote(password),
            shell_words::quote(install_command),
        ),
        None => format!("sudo -n bash -lc {}", shell_words::quote(install_command)),
    }
}

/// Full synthesis: install command for `manager` and `packages`, wrapped for
/// privileged execution. Deterministic for identical inputs.
#[must_use]
pub fn synthesize(
    manager: PackageManager,
    packages: &[&str],
    sudo_password: Option<&str>,
) -> String {
    escalate(&build_install_command(manager, packages), sudo_password)
}
