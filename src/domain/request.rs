//! Programmatic installation request — the JSON payload contract.
//!
//! Deserialization accepts the raw shape; [`InstallRequest::validate`] is
//! the only path from a payload to engine inputs, funneling through the
//! same selection resolver and credentials factory as the CLI.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::catalog::Catalog;
use crate::domain::credentials::{Credentials, DEFAULT_SSH_PORT};
use crate::domain::error::InstallError;
use crate::domain::selection;

fn default_port() -> u16 {
    DEFAULT_SSH_PORT
}

/// JSON installation request, as supplied by a programmatic caller.
#[derive(Debug, Clone, Deserialize)]
pub struct InstallRequest {
    pub host: String,
    pub username: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub key_file: Option<PathBuf>,
    pub software: Vec<String>,
}

impl InstallRequest {
    /// Validate the payload into engine inputs.
    ///
    /// Selection is validated before credentials so a caller gets the most
    /// actionable error first; both happen before any connection attempt.
    ///
    /// # Errors
    ///
    /// Returns the selection resolver's errors for the `software` array and
    /// [`InstallError::InvalidCredentials`] for malformed connection fields.
    pub fn validate(self, catalog: &Catalog) -> Result<(Credentials, Vec<String>), InstallError> {
        let names = selection::resolve_by_name(self.software.iter().map(String::as_str), catalog)?;
        let credentials = Credentials::new(
            self.host,
            self.port,
            self.username,
            self.password,
            self.key_file,
        )?;
        Ok((credentials, names))
    }
}
