//! Application service - node bootstrap use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::PathBuf;
use std::process::Output;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{BootstrapToolchain, FileHasher, LaunchSpec, ProgressReporter};
use crate::domain::config::BootstrapConfig;
use crate::domain::error::BootstrapError;

/// Outcome of a completed bootstrap.
#[derive(Debug, Serialize)]
pub struct BootstrapOutcome {
    /// Where the downloaded archive was written.
    pub archive_path: PathBuf,
    /// Root of the unpacked agent tree.
    pub agent_dir: PathBuf,
    /// PID of the detached agent process.
    pub pid: u32,
}

/// Download the agent package, unpack it, and start the agent.
///
/// The steps run strictly in order and the first failure aborts the whole
/// procedure: nothing is retried, and partial state (a half-written archive,
/// a partly unpacked tree) is left in place for inspection. The returned PID
/// is the process as spawned; whether the agent is still alive afterwards is
/// not verified.
///
/// # Errors
///
/// Returns a [`BootstrapError`] when a step's command exits non-zero or the
/// optional checksum does not match, and a spawn-level error when a tool
/// cannot be executed at all.
pub async fn bootstrap_agent(
    toolchain: &impl BootstrapToolchain,
    hasher: &impl FileHasher,
    reporter: &impl ProgressReporter,
    config: &BootstrapConfig,
) -> Result<BootstrapOutcome> {
    let archive = config.archive_path();

    reporter.step(&format!("downloading {}", config.package_url));
    let fetched = toolchain.fetch(&config.package_url, &archive).await?;
    if !fetched.status.success() {
        return Err(BootstrapError::DownloadFailed {
            details: stderr_text(&fetched),
        }
        .into());
    }
    reporter.success(&format!("downloaded {}", archive.display()));

    if let Some(expected) = &config.package_sha256 {
        reporter.step("verifying package checksum");
        let actual = hasher
            .sha256_file(&archive)
            .context("hashing downloaded package")?;
        if !actual.eq_ignore_ascii_case(expected) {
            return Err(BootstrapError::ChecksumMismatch {
                expected: expected.clone(),
                actual,
            }
            .into());
        }
        reporter.success("checksum verified");
    }

    reporter.step(&format!("unpacking {}", config.package_name));
    let unpacked = toolchain.unpack(&archive, &config.install_dir).await?;
    if !unpacked.status.success() {
        return Err(BootstrapError::ExtractFailed {
            details: stderr_text(&unpacked),
        }
        .into());
    }
    let agent_dir = config.agent_dir();
    reporter.success(&format!("unpacked into {}", agent_dir.display()));

    reporter.step("starting the huker agent");
    let binary = config.agent_binary();
    let log_file = config.log_file();
    let state_file = config.state_file();
    let spec = LaunchSpec {
        binary: &binary,
        log_level: config.log_level.as_str(),
        log_file: &log_file,
        data_dir: &config.install_dir,
        port: config.agent_port,
        state_file: &state_file,
    };
    let pid = match toolchain.launch(&spec) {
        Ok(pid) => pid,
        Err(e) => {
            return Err(BootstrapError::LaunchFailed {
                details: format!("{e:#}"),
            }
            .into());
        }
    };
    reporter.success(&format!("agent started (pid {pid})"));

    Ok(BootstrapOutcome {
        archive_path: archive,
        agent_dir,
        pid,
    })
}

/// A failed command surfaces its stderr; a successful one surfaces stdout.
/// Only the failure side feeds error messages here.
fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}
