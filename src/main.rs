use anyhow::Result;
use clap::Parser;
use log::info;

use doccmp::cli::{Cli, Commands};
use doccmp::cli::commands::{handle_compare_command, handle_config_command, tui_command};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Log to file (truncated each run) so the TUI owns the terminal
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("doccmp.log")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting doccmp");

    match cli.command {
        Commands::Compare(args) => handle_compare_command(args).await,
        Commands::Tui(args) => tui_command(args).await,
        Commands::Config(args) => handle_config_command(args),
    }
}
