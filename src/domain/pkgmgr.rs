//! Recognized package managers and probe-output parsing.

use std::fmt;

use crate::domain::error::InstallError;

/// Closed set of recognized package managers.
///
/// Detection priority is apt-get, then dnf, then yum, then zypper — the
/// Debian family is checked first, and this order resolves hosts that
/// expose more than one manager binary. It must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Apt,
    Dnf,
    Yum,
    Zypper,
}

impl PackageManager {
    /// Parse the single token echoed by the detection probe.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::UnsupportedDistribution`] for the probe's
    /// `unknown` sentinel, and [`InstallError::UnsupportedPackageManager`]
    /// for any token outside the probe's vocabulary (a mangled or hostile
    /// shell would surface here).
    pub fn from_probe_token(token: &str) -> Result<Self, InstallError> {
        match token.trim() {
            "apt" => Ok(Self::Apt),
            "dnf" => Ok(Self::Dnf),
            "yum" => Ok(Self::Yum),
            "zypper" => Ok(Self::Zypper),
            "unknown" => Err(InstallError::UnsupportedDistribution),
            other => Err(InstallError::UnsupportedPackageManager(other.to_string())),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Apt => "apt",
            Self::Dnf => "dnf",
            Self::Yum => "yum",
            Self::Zypper => "zypper",
        };
        f.write_str(name)
    }
}
