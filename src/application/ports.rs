//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` - never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

// ── Value Types ──────────────────────────────────────────────────────────────

/// Launch parameters for starting the supervisor agent.
///
/// Flag names and positions built from this spec are the agent binary's
/// command-line contract and must be reproduced exactly.
pub struct LaunchSpec<'a> {
    /// Path to the agent executable inside the unpacked package tree.
    pub binary: &'a Path,
    /// Agent log level, e.g. `"INFO"`.
    pub log_level: &'a str,
    /// File the agent logs to.
    pub log_file: &'a Path,
    /// Agent data directory.
    pub data_dir: &'a Path,
    /// Agent listening port.
    pub port: u16,
    /// Agent state database path.
    pub state_file: &'a Path,
}

// ── Command Runner Port ──────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output, using the instance's configured
    /// default timeout. Blocks the calling task until the subprocess exits.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a program with an explicit timeout override. `None` waits
    /// indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds the
    /// timeout. On timeout, the child process must be killed (not left
    /// orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<Output>;

    /// Spawn a program detached from the calling process: stdio redirected
    /// away, no kill-on-drop, free to outlive the installer. Returns the OS
    /// process id; ownership of the process transfers to the OS.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn spawn_detached(&self, program: &str, args: &[&str]) -> Result<u32>;
}

// ── Toolchain Ports ──────────────────────────────────────────────────────────

/// Fetches the packaged agent archive onto the local filesystem.
#[allow(async_fn_in_trait)]
pub trait PackageFetcher {
    /// Download `url` to `dest`, blocking until the transfer completes.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<Output>;
}

/// Unpacks a downloaded archive into the installation directory.
#[allow(async_fn_in_trait)]
pub trait ArchiveUnpacker {
    /// Extract `archive` into `dest_dir`, blocking until extraction completes.
    async fn unpack(&self, archive: &Path, dest_dir: &Path) -> Result<Output>;
}

/// Starts the agent process detached from the installer.
pub trait AgentLauncher {
    /// Dispatch the agent and return its PID. Success means the process was
    /// spawned, not that the agent is healthy - no liveness check happens
    /// here or afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn launch(&self, spec: &LaunchSpec<'_>) -> Result<u32>;
}

/// Composite trait - any type implementing all three sub-traits is a
/// `BootstrapToolchain`.
pub trait BootstrapToolchain: PackageFetcher + ArchiveUnpacker + AgentLauncher {}

/// Blanket implementation.
impl<T> BootstrapToolchain for T where T: PackageFetcher + ArchiveUnpacker + AgentLauncher {}

// ── Progress Reporting Port ──────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait - no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    #[allow(dead_code)]
    fn warn(&self, message: &str);
}

// ── Filesystem Port ──────────────────────────────────────────────────────────

/// Abstracts file hashing operations.
pub trait FileHasher {
    /// Compute the SHA-256 hash of a file, returned as lowercase hex.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn sha256_file(&self, path: &Path) -> Result<String>;
}
