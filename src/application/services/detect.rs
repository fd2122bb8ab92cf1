//! Package manager detection — exactly one probe per session.

use crate::application::ports::CommandChannel;
use crate::domain::error::InstallError;
use crate::domain::pkgmgr::PackageManager;

/// The single remote probe. Tests for each manager binary in fixed priority
/// order (Debian family first) and echoes one token.
pub const PROBE_COMMAND: &str = "bash -lc 'if command -v apt-get >/dev/null 2>&1; then echo apt; \
elif command -v dnf >/dev/null 2>&1; then echo dnf; \
elif command -v yum >/dev/null 2>&1; then echo yum; \
elif command -v zypper >/dev/null 2>&1; then echo zypper; \
else echo unknown; fi'";

/// Probe the connected host for its package manager.
///
/// The result is valid for this session only and is not cached.
///
/// # Errors
///
/// Returns [`InstallError::CommandExecutionFailed`] if the probe itself
/// exits non-zero, [`InstallError::UnsupportedDistribution`] if no
/// recognized manager is present, and the channel's own error if the
/// transport fails.
pub fn detect_package_manager(
    channel: &mut impl CommandChannel,
) -> Result<PackageManager, InstallError> {
    let outcome = channel.exec(PROBE_COMMAND)?;
    if !outcome.success() {
        return Err(InstallError::CommandExecutionFailed {
            exit_code: outcome.exit_code,
            stdout: outcome.stdout,
            stderr: outcome.stderr,
        });
    }
    PackageManager::from_probe_token(&outcome.stdout)
}
