//! ssh2-backed implementation of the `Connector` / `CommandChannel` ports.
//!
//! Host keys are auto-trusted on first use: libssh2 performs no known-hosts
//! verification unless asked, and this adapter does not ask. That is the
//! documented behavior, not a hardening gap to fix silently. Authentication
//! is fully specified by the caller's credentials — no agent, no default
//! on-disk key lookup.

use std::io::Read;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use anyhow::{Context, Result};
use ssh2::Session;

use crate::application::ports::{CommandChannel, CommandOutcome, Connector};
use crate::domain::credentials::{Auth, Credentials};
use crate::domain::error::InstallError;

/// Opens password- or key-authenticated SSH sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SshConnector;

/// A live SSH session. Disconnects on `close()` or on drop, whichever
/// comes first; the second is a no-op.
pub struct SshChannel {
    session: Session,
    host: String,
    closed: bool,
}

impl Connector for SshConnector {
    type Channel = SshChannel;

    fn connect(
        &self,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<SshChannel, InstallError> {
        open_session(credentials, timeout).map_err(|source| InstallError::ConnectionError {
            host: credentials.host().to_string(),
            reason: format!("{source:#}"),
        })
    }
}

fn open_session(credentials: &Credentials, timeout: Duration) -> Result<SshChannel> {
    let addr = (credentials.host(), credentials.port())
        .to_socket_addrs()
        .with_context(|| format!("resolve {}:{}", credentials.host(), credentials.port()))?
        .next()
        .ok_or_else(|| anyhow::anyhow!("no addresses for {}", credentials.host()))?;

    let stream = TcpStream::connect_timeout(&addr, timeout).context("tcp connect")?;

    let mut session = Session::new().context("create ssh session")?;
    session.set_timeout(u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX));
    session.set_tcp_stream(stream);
    session.handshake().context("ssh handshake")?;

    match credentials.auth() {
        Auth::Password(password) => session
            .userauth_password(credentials.username(), password)
            .context("password authentication")?,
        Auth::KeyFile(path) => session
            .userauth_pubkey_file(credentials.username(), None, path, None)
            .context("private key authentication")?,
    }
    anyhow::ensure!(session.authenticated(), "authentication rejected");

    Ok(SshChannel {
        session,
        host: credentials.host().to_string(),
        closed: false,
    })
}

impl SshChannel {
    fn run(&mut self, command: &str) -> Result<CommandOutcome> {
        let mut channel = self.session.channel_session().context("open exec channel")?;
        channel.exec(command).context("dispatch command")?;

        let mut stdout = String::new();
        channel
            .read_to_string(&mut stdout)
            .context("read stdout")?;
        let mut stderr = String::new();
        channel
            .stderr()
            .read_to_string(&mut stderr)
            .context("read stderr")?;

        channel.wait_close().context("wait for channel close")?;
        let exit_code = channel.exit_status().context("read exit status")?;

        Ok(CommandOutcome {
            exit_code,
            stdout,
            stderr,
        })
    }
}

impl CommandChannel for SshChannel {
    fn exec(&mut self, command: &str) -> Result<CommandOutcome, InstallError> {
        self.run(command).map_err(|source| InstallError::ConnectionError {
            host: self.host.clone(),
            reason: format!("{source:#}"),
        })
    }

    fn close(&mut self) {
        if !self.closed {
            let _ = self.session.disconnect(None, "session finished", None);
            self.closed = true;
        }
    }
}

impl Drop for SshChannel {
    fn drop(&mut self) {
        self.close();
    }
}
