//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`. All error
//! types implement `thiserror::Error` and convert to `anyhow::Error` via the
//! `?` operator.

use thiserror::Error;

/// Errors raised while bootstrapping a node.
///
/// Each external-command step has exactly one failure shape: the step name
/// plus the raw error text captured from the subprocess. Finer-grained
/// causes (network unreachable, disk full, permission denied) all collapse
/// into the owning step's variant.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Failed to download package, {details}")]
    DownloadFailed { details: String },

    #[error("Failed to unzip the package, {details}")]
    ExtractFailed { details: String },

    #[error("Failed to start the huker agent, {details}")]
    LaunchFailed { details: String },

    #[error("Checksum mismatch for downloaded package: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}
