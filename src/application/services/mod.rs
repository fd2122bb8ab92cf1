//! Application services — use-case orchestration.
//!
//! Each service composes domain logic with port trait calls. Services
//! import only from `crate::domain` and `crate::application::ports`.

pub mod detect;
pub mod install;

pub use detect::detect_package_manager;
pub use install::{InstallReport, install};
