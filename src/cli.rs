//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Bootstrap a huker node: download, unpack, and start the supervisor agent
#[derive(Parser)]
#[command(
    name = "huker-install",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download the agent package, unpack it, and start the agent
    Install(commands::install::InstallArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            no_color,
            quiet,
            json,
            command,
        } = self;
        match command {
            Command::Install(args) => {
                let ctx = crate::output::OutputContext::new(no_color, quiet);
                commands::install::run(&args, &ctx, json).await
            }
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
        }
    }
}
