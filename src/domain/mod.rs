//! Domain layer - pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod package;

#[allow(unused_imports)]
pub use config::{BootstrapConfig, LogLevel};
#[allow(unused_imports)]
pub use error::BootstrapError;
#[allow(unused_imports)]
pub use package::{extracted_dir_name, hex_encode};
