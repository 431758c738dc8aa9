//! Huker installer - bootstraps a node by downloading, unpacking, and
//! launching the supervisor agent.

use clap::Parser;

use huker_installer::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
