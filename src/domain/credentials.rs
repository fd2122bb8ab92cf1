//! SSH credentials as a validated sum type.
//!
//! The both-or-neither password/key state is unrepresentable after
//! construction: [`Credentials::new`] is the only way in, and it enforces
//! exactly one authentication method.

use std::path::{Path, PathBuf};

use crate::domain::error::InstallError;

/// Default SSH port when the caller does not supply one.
pub const DEFAULT_SSH_PORT: u16 = 22;

/// Authentication method — exactly one per connection.
///
/// Agent-based and on-disk default-key lookup are deliberately unsupported;
/// authentication is fully specified by the caller's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    /// Password authentication. The same password is piped to `sudo -S` for
    /// privilege escalation on the remote host.
    Password(String),
    /// Private key file on the local machine.
    KeyFile(PathBuf),
}

/// Validated connection parameters for one remote host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    host: String,
    port: u16,
    username: String,
    auth: Auth,
}

impl Credentials {
    /// Validating factory.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::InvalidCredentials`] if the host or username
    /// is empty, the port is 0, or the caller supplied both or neither of
    /// password / key file (empty strings count as absent).
    pub fn new(
        host: String,
        port: u16,
        username: String,
        password: Option<String>,
        key_file: Option<PathBuf>,
    ) -> Result<Self, InstallError> {
        let host = host.trim().to_string();
        if host.is_empty() {
            return Err(InstallError::InvalidCredentials("host must not be empty".into()));
        }
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(InstallError::InvalidCredentials(
                "username must not be empty".into(),
            ));
        }
        if port == 0 {
            return Err(InstallError::InvalidCredentials(
                "port must be in the range 1-65535".into(),
            ));
        }

        let password = password.filter(|p| !p.is_empty());
        let key_file = key_file.filter(|k| !k.as_os_str().is_empty());
        let auth = match (password, key_file) {
            (Some(password), None) => Auth::Password(password),
            (None, Some(key_file)) => Auth::KeyFile(key_file),
            (Some(_), Some(_)) => {
                return Err(InstallError::InvalidCredentials(
                    "supply either a password or a key file, not both".into(),
                ));
            }
            (None, None) => {
                return Err(InstallError::InvalidCredentials(
                    "supply a password or a key file".into(),
                ));
            }
        };

        Ok(Self {
            host,
            port,
            username,
            auth,
        })
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Password to pipe into `sudo -S`, when password-authenticated.
    #[must_use]
    pub fn sudo_password(&self) -> Option<&str> {
        match &self.auth {
            Auth::Password(password) => Some(password),
            Auth::KeyFile(_) => None,
        }
    }

    /// Private key path, when key-authenticated.
    #[must_use]
    pub fn key_file(&self) -> Option<&Path> {
        match &self.auth {
            Auth::Password(_) => None,
            Auth::KeyFile(path) => Some(path),
        }
    }
}
