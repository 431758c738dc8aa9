//! `huker-install install` - download the agent package, unpack it, and
//! start the agent.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use crate::application::ports::LaunchSpec;
use crate::application::services::bootstrap::{BootstrapOutcome, bootstrap_agent};
use crate::domain::config::{
    BootstrapConfig, DEFAULT_AGENT_PORT, DEFAULT_INSTALL_DIR, DEFAULT_PACKAGE_NAME,
    DEFAULT_PACKAGE_URL, LogLevel,
};
use crate::domain::error::BootstrapError;
use crate::infra::fs::LocalFs;
use crate::infra::toolchain::{self, ShellToolchain};
use crate::output::reporter::{InstallReporter, SpinnerReporter, TerminalReporter};
use crate::output::{OutputContext, json};

/// Arguments for the install command.
#[derive(Args)]
pub struct InstallArgs {
    /// Installation directory for the archive, unpacked tree, and agent
    /// runtime files
    #[arg(long, default_value = DEFAULT_INSTALL_DIR)]
    pub install_dir: PathBuf,

    /// Package archive file name
    #[arg(long, default_value = DEFAULT_PACKAGE_NAME)]
    pub package: String,

    /// URL the package archive is fetched from
    #[arg(long, default_value = DEFAULT_PACKAGE_URL)]
    pub package_url: String,

    /// Listening port for the launched agent
    #[arg(long, default_value_t = DEFAULT_AGENT_PORT)]
    pub port: u16,

    /// Agent log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Expected SHA-256 of the package archive (hex), verified after download
    #[arg(long, value_name = "HEX")]
    pub sha256: Option<String>,

    /// Abort the download or unpack command after this many seconds
    /// (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the commands that would run without executing them
    #[arg(long)]
    pub dry_run: bool,
}

impl InstallArgs {
    fn to_config(&self) -> BootstrapConfig {
        BootstrapConfig {
            install_dir: self.install_dir.clone(),
            package_name: self.package.clone(),
            package_url: self.package_url.clone(),
            agent_port: self.port,
            log_level: self.log_level,
            package_sha256: self.sha256.clone(),
            command_timeout: self.timeout.map(Duration::from_secs),
        }
    }
}

/// Run `huker-install install`.
///
/// # Errors
///
/// Returns an error if the install directory cannot be created or any
/// bootstrap step fails.
pub async fn run(args: &InstallArgs, ctx: &OutputContext, json_mode: bool) -> Result<()> {
    let config = args.to_config();

    if args.dry_run {
        return print_plan(&config, ctx, json_mode);
    }

    std::fs::create_dir_all(&config.install_dir).with_context(|| {
        format!(
            "creating install directory {}",
            config.install_dir.display()
        )
    })?;

    let toolchain = ShellToolchain::default_runner(config.command_timeout);
    let reporter = if json_mode {
        InstallReporter::Silent
    } else if ctx.show_progress() {
        InstallReporter::Spinner(SpinnerReporter::new())
    } else {
        InstallReporter::Terminal(TerminalReporter::new(ctx))
    };

    match bootstrap_agent(&toolchain, &LocalFs, &reporter, &config).await {
        Ok(outcome) => {
            drop(reporter);
            if json_mode {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&outcome).context("JSON serialization failed")?
                );
            } else {
                render_summary(ctx, &config, &outcome);
            }
            Ok(())
        }
        Err(e) => {
            drop(reporter);
            if json_mode {
                println!("{}", json::format_error(&format!("{e:#}"), error_code(&e))?);
            }
            Err(e)
        }
    }
}

fn render_summary(ctx: &OutputContext, config: &BootstrapConfig, outcome: &BootstrapOutcome) {
    ctx.header("Agent installed");
    ctx.kv("archive", &outcome.archive_path.display().to_string());
    ctx.kv("agent dir", &outcome.agent_dir.display().to_string());
    ctx.kv("port", &config.agent_port.to_string());
    ctx.kv("pid", &outcome.pid.to_string());
    ctx.info("liveness is not verified; check the agent's log file if in doubt");
}

/// Print the three command lines the bootstrap would run, without side
/// effects.
fn print_plan(config: &BootstrapConfig, ctx: &OutputContext, json_mode: bool) -> Result<()> {
    let archive = config.archive_path();
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

    let download = render_command(
        toolchain::FETCH_PROGRAM,
        &toolchain::fetch_args(&config.package_url, &archive),
    );
    let unpack = render_command(
        toolchain::UNPACK_PROGRAM,
        &toolchain::unpack_args(&archive, &config.install_dir),
    );
    let launch = render_command(&binary.display().to_string(), &toolchain::launch_args(&spec));

    if json_mode {
        let plan = serde_json::json!({
            "download": download,
            "unpack": unpack,
            "launch": launch,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&plan).context("JSON serialization failed")?
        );
    } else {
        ctx.header("Planned commands");
        ctx.kv("download", &download);
        ctx.kv("unpack", &unpack);
        ctx.kv("launch", &launch);
    }
    Ok(())
}

/// Display form only - execution always uses the structured argument vector.
fn render_command(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

fn error_code(e: &anyhow::Error) -> &'static str {
    match e.downcast_ref::<BootstrapError>() {
        Some(BootstrapError::DownloadFailed { .. }) => "download-failed",
        Some(BootstrapError::ExtractFailed { .. }) => "extract-failed",
        Some(BootstrapError::LaunchFailed { .. }) => "launch-failed",
        Some(BootstrapError::ChecksumMismatch { .. }) => "checksum-mismatch",
        None => "install-failed",
    }
}
