//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::time::Duration;

use crate::domain::credentials::Credentials;
use crate::domain::error::InstallError;

/// Default connect/exec timeout for a remote session.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Captured result of one remote command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// An open, authenticated remote-command session.
///
/// A value of this type only exists after a successful connect and
/// authenticate, so `exec` is never called on a dead session — the
/// Unopened→Connected transition is encoded in the type.
pub trait CommandChannel {
    /// Run `command` on the remote host and capture its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::ConnectionError`] if the transport fails
    /// mid-command.
    fn exec(&mut self, command: &str) -> Result<CommandOutcome, InstallError>;

    /// Close the session. Idempotent; safe to call more than once.
    fn close(&mut self);
}

/// Opens remote-command sessions from validated credentials.
///
/// One session per installation request; sessions are never reused across
/// invocations.
pub trait Connector {
    type Channel: CommandChannel;

    /// Open and authenticate a session, blocking up to `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::ConnectionError`] on any resolution,
    /// network, handshake, or authentication failure.
    fn connect(
        &self,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Self::Channel, InstallError>;
}
