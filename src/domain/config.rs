//! Installer configuration and the installation layout derived from it.
//!
//! Pure functions only - no I/O, no async, no filesystem access.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::domain::package::{
    AGENT_EXECUTABLE, SUPERVISOR_DB, SUPERVISOR_LOG, extracted_dir_name,
};

// ── Constants ────────────────────────────────────────────────────────────────

/// Defaults reproduce the fixed node-bootstrap configuration.
pub const DEFAULT_INSTALL_DIR: &str = ".";
pub const DEFAULT_PACKAGE_NAME: &str = "huker-1.0.0.tar.gz";
pub const DEFAULT_PACKAGE_URL: &str = "http://127.0.0.1:4000/huker-1.0.0.tar.gz";
pub const DEFAULT_AGENT_PORT: u16 = 9002;

// ── Log level ────────────────────────────────────────────────────────────────

/// Log level handed to the launched agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The uppercase form the agent's `--log-level` flag expects.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lowercase so clap default values round-trip through the value parser.
        f.write_str(&self.as_str().to_ascii_lowercase())
    }
}

// ── Config ───────────────────────────────────────────────────────────────────

/// Everything the bootstrap procedure needs, passed in at construction time.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Directory the archive is downloaded and unpacked into, and where the
    /// agent's runtime files will live.
    pub install_dir: PathBuf,
    /// Package archive file name, e.g. `huker-1.0.0.tar.gz`.
    pub package_name: String,
    /// URL the package archive is fetched from.
    pub package_url: String,
    /// Listening port for the launched agent.
    pub agent_port: u16,
    /// Log level handed to the launched agent.
    pub log_level: LogLevel,
    /// Expected SHA-256 of the archive (lowercase hex). `None` skips
    /// verification.
    pub package_sha256: Option<String>,
    /// Bound on the download and unpack commands. `None` waits indefinitely.
    pub command_timeout: Option<Duration>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            install_dir: PathBuf::from(DEFAULT_INSTALL_DIR),
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            package_url: DEFAULT_PACKAGE_URL.to_string(),
            agent_port: DEFAULT_AGENT_PORT,
            log_level: LogLevel::Info,
            package_sha256: None,
            command_timeout: None,
        }
    }
}

impl BootstrapConfig {
    /// Where the downloaded archive is written.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.install_dir.join(&self.package_name)
    }

    /// Root of the unpacked agent tree, named after the archive minus its
    /// `.tar.gz` suffix.
    #[must_use]
    pub fn agent_dir(&self) -> PathBuf {
        self.install_dir.join(extracted_dir_name(&self.package_name))
    }

    /// The agent executable inside the unpacked tree.
    #[must_use]
    pub fn agent_binary(&self) -> PathBuf {
        self.agent_dir().join("bin").join(AGENT_EXECUTABLE)
    }

    /// Log file path handed to the agent.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.install_dir.join(SUPERVISOR_LOG)
    }

    /// State database path handed to the agent.
    #[must_use]
    pub fn state_file(&self) -> PathBuf {
        self.install_dir.join(SUPERVISOR_DB)
    }
}
