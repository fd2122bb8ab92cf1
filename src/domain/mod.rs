//! Domain layer — pure types, validation, and command synthesis.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`. All
//! functions are synchronous and take data in, returning data out.

pub mod catalog;
pub mod command;
pub mod credentials;
pub mod error;
pub mod pkgmgr;
pub mod request;
pub mod selection;

pub use catalog::Catalog;
pub use credentials::{Auth, Credentials, DEFAULT_SSH_PORT};
pub use error::InstallError;
pub use pkgmgr::PackageManager;
pub use request::InstallRequest;
