// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use funroad_server::bootstrap::BootstrapPlan;
use funroad_server::telemetry::init_tracing;
use funroad_server::{ServerConfig, ServerError, serve};

#[derive(Parser, Debug)]
#[command(name = "funroad-server", version, about = "Funroad storefront service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default).
    Serve,
    /// Print the database bootstrap script.
    BootstrapScript {
        /// Write the script to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let cli = Cli::parse();
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_json);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::BootstrapScript { output } => {
            let script = BootstrapPlan::from_config(&config.database).render_script();
            match output {
                Some(path) => {
                    std::fs::write(&path, script)?;
                    tracing::info!(path = %path.display(), "bootstrap script written");
                }
                None => print!("{script}"),
            }
            Ok(())
        }
    }
}
