//! Infrastructure layer — concrete implementations of application ports.
//!
//! This module contains all I/O-performing code. Imports from
//! `crate::domain` and `crate::application::ports` are allowed; imports
//! from `crate::commands` or `crate::output` are forbidden.

pub mod ssh;

pub use ssh::{SshChannel, SshConnector};
