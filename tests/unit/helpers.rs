//! Shared test helpers: scripted connector/channel mocks and outcome
//! constructors.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rigup::application::ports::{CommandChannel, CommandOutcome, Connector};
use rigup::domain::credentials::Credentials;
use rigup::domain::error::InstallError;

// ── Outcome constructors ──────────────────────────────────────────────────────

pub fn ok_outcome(stdout: &str) -> CommandOutcome {
    CommandOutcome {
        exit_code: 0,
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

pub fn failed_outcome(exit_code: i32, stderr: &str) -> CommandOutcome {
    CommandOutcome {
        exit_code,
        stdout: String::new(),
        stderr: stderr.to_string(),
    }
}

// ── Credentials constructors ──────────────────────────────────────────────────

pub fn password_credentials() -> Credentials {
    Credentials::new(
        "host.example".to_string(),
        22,
        "deploy".to_string(),
        Some("hunter2".to_string()),
        None,
    )
    .expect("valid credentials")
}

pub fn key_credentials() -> Credentials {
    Credentials::new(
        "host.example".to_string(),
        22,
        "deploy".to_string(),
        None,
        Some("/home/deploy/.ssh/id_ed25519".into()),
    )
    .expect("valid credentials")
}

// ── Scripted connector/channel ────────────────────────────────────────────────

/// Everything the mocks observed, shared between connector and channel so
/// tests can inspect it after the engine has consumed the channel.
#[derive(Default)]
pub struct ChannelLog {
    pub connect_calls: u32,
    pub executed: Vec<String>,
    pub close_calls: u32,
}

/// Connector whose channels replay a fixed script of exec results and
/// record every command and every close.
pub struct ScriptedConnector {
    script: Mutex<Vec<Result<CommandOutcome, InstallError>>>,
    connect_error: Mutex<Option<InstallError>>,
    log: Arc<Mutex<ChannelLog>>,
}

impl ScriptedConnector {
    pub fn with_outcomes(outcomes: Vec<CommandOutcome>) -> Self {
        Self::with_script(outcomes.into_iter().map(Ok).collect())
    }

    pub fn with_script(script: Vec<Result<CommandOutcome, InstallError>>) -> Self {
        Self {
            script: Mutex::new(script),
            connect_error: Mutex::new(None),
            log: Arc::default(),
        }
    }

    pub fn failing_connect(error: InstallError) -> Self {
        Self {
            script: Mutex::new(Vec::new()),
            connect_error: Mutex::new(Some(error)),
            log: Arc::default(),
        }
    }

    pub fn connect_calls(&self) -> u32 {
        self.log.lock().expect("lock").connect_calls
    }

    pub fn executed(&self) -> Vec<String> {
        self.log.lock().expect("lock").executed.clone()
    }

    pub fn close_calls(&self) -> u32 {
        self.log.lock().expect("lock").close_calls
    }
}

pub struct ScriptedChannel {
    script: Vec<Result<CommandOutcome, InstallError>>,
    log: Arc<Mutex<ChannelLog>>,
}

impl Connector for ScriptedConnector {
    type Channel = ScriptedChannel;

    fn connect(
        &self,
        _credentials: &Credentials,
        _timeout: Duration,
    ) -> Result<ScriptedChannel, InstallError> {
        self.log.lock().expect("lock").connect_calls += 1;
        if let Some(error) = self.connect_error.lock().expect("lock").take() {
            return Err(error);
        }
        Ok(ScriptedChannel {
            script: std::mem::take(&mut *self.script.lock().expect("lock")),
            log: Arc::clone(&self.log),
        })
    }
}

impl CommandChannel for ScriptedChannel {
    fn exec(&mut self, command: &str) -> Result<CommandOutcome, InstallError> {
        self.log.lock().expect("lock").executed.push(command.to_string());
        assert!(!self.script.is_empty(), "unexpected exec: {command}");
        self.script.remove(0)
    }

    fn close(&mut self) {
        self.log.lock().expect("lock").close_calls += 1;
    }
}
