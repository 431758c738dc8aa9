//! Shell toolchain - wget/tar/agent invocations routed through a
//! `CommandRunner`.
//!
//! Commands are always structured invocations (an executable plus an
//! explicit argument vector), never an interpolated shell string, so paths
//! with spaces or metacharacters cannot change the command's meaning.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{
    AgentLauncher, ArchiveUnpacker, CommandRunner, LaunchSpec, PackageFetcher,
};
use crate::infra::command_runner::TokioCommandRunner;

/// HTTP retrieval tool used for the download step, resolved from `PATH`.
pub const FETCH_PROGRAM: &str = "wget";

/// Extraction tool used for the unpack step, resolved from `PATH`.
pub const UNPACK_PROGRAM: &str = "tar";

// ── Argument builders ────────────────────────────────────────────────────────
// Pure functions so the exact command surface is testable without spawning.

/// `wget <url> -O <dest>`
#[must_use]
pub fn fetch_args(url: &str, dest: &Path) -> Vec<String> {
    vec![
        url.to_string(),
        "-O".to_string(),
        dest.display().to_string(),
    ]
}

/// `tar xzvf <archive> -C <dest-dir>`
///
/// The verbose listing only affects captured output, not extraction
/// semantics.
#[must_use]
pub fn unpack_args(archive: &Path, dest_dir: &Path) -> Vec<String> {
    vec![
        "xzvf".to_string(),
        archive.display().to_string(),
        "-C".to_string(),
        dest_dir.display().to_string(),
    ]
}

/// `--log-level <LVL> --log-file <log> start-agent --dir <dir> --port <port>
/// --file <db>`
///
/// This flag contract is what the agent binary parses; order and names must
/// not change.
#[must_use]
pub fn launch_args(spec: &LaunchSpec<'_>) -> Vec<String> {
    vec![
        "--log-level".to_string(),
        spec.log_level.to_string(),
        "--log-file".to_string(),
        spec.log_file.display().to_string(),
        "start-agent".to_string(),
        "--dir".to_string(),
        spec.data_dir.display().to_string(),
        "--port".to_string(),
        spec.port.to_string(),
        "--file".to_string(),
        spec.state_file.display().to_string(),
    ]
}

// ── Adapter ──────────────────────────────────────────────────────────────────

/// Infrastructure adapter that routes all bootstrap tool calls through a
/// `CommandRunner`.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct ShellToolchain<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> ShellToolchain<R> {
    /// Create a toolchain with an explicit runner instance.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl ShellToolchain<TokioCommandRunner> {
    /// Convenience constructor for production use. `timeout` bounds the
    /// download and unpack commands; `None` waits for them indefinitely.
    #[must_use]
    pub fn default_runner(timeout: Option<Duration>) -> Self {
        Self {
            runner: TokioCommandRunner::new(timeout),
        }
    }
}

impl<R: CommandRunner> PackageFetcher for ShellToolchain<R> {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<Output> {
        let args = fetch_args(url, dest);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner
            .run(FETCH_PROGRAM, &args)
            .await
            .context("failed to run wget")
    }
}

impl<R: CommandRunner> ArchiveUnpacker for ShellToolchain<R> {
    async fn unpack(&self, archive: &Path, dest_dir: &Path) -> Result<Output> {
        let args = unpack_args(archive, dest_dir);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner
            .run(UNPACK_PROGRAM, &args)
            .await
            .context("failed to run tar")
    }
}

impl<R: CommandRunner> AgentLauncher for ShellToolchain<R> {
    fn launch(&self, spec: &LaunchSpec<'_>) -> Result<u32> {
        let program = spec.binary.display().to_string();
        let args = launch_args(spec);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner.spawn_detached(&program, &args)
    }
}
