//! JK, a Jenkins command line client.
//!
//! Resolves connection settings, authenticates against the server, then
//! dispatches one of the read-only inspection commands: job status fan-out,
//! last-build logs, the raw build queue, node liveness, or opening job pages
//! in the browser.

mod cli;
mod commands;
mod error;
mod logs;
mod matcher;
mod prelude;
mod report;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{handle_logs, handle_nodes, handle_open, handle_queue, handle_status};
use jk_api::JenkinsClient;
use jk_config::Config;

use crate::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(ref e) = result {
        log::error!("Error: {}", e);
    }

    result
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.url, cli.user, cli.token)?;
    let jenkins = JenkinsClient::connect(&config.url, &config.user, config.token).await?;

    match cli.command {
        Commands::Status { regex } => handle_status(&jenkins, &regex).await,
        Commands::Logs { job } => handle_logs(&jenkins, &job, cli.salt).await,
        Commands::Queue { regex } => handle_queue(&jenkins, &regex, cli.verbose, cli.salt).await,
        Commands::Nodes => handle_nodes(&jenkins).await,
        Commands::Open { regex } => handle_open(&jenkins, &regex).await,
    }
}
