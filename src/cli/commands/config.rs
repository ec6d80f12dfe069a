use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

use crate::config::Config;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show the resolved configuration and where each value came from
    Show {
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Write a commented config template to the config path
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

pub fn handle_config_command(args: ConfigCommands) -> Result<()> {
    match args.command {
        ConfigSubcommands::Show { no_color } => {
            if no_color {
                colored::control::set_override(false);
            }
            show_config()
        }
        ConfigSubcommands::Init { force } => init_config(force),
    }
}

fn show_config() -> Result<()> {
    let config = Config::load()?;
    let config_path = Config::get_config_path()?;

    println!("Config file: {}", config_path.display().to_string().cyan());
    println!();

    match config.resolve_endpoint(None) {
        Ok((endpoint, source)) => {
            println!("endpoint        = {}  (from {})", endpoint.green(), source.label());
        }
        Err(_) => {
            println!("endpoint        = {}", "<not configured>".red());
        }
    }
    println!("timeout_secs    = {}", config.timeout_secs);
    println!("reveal_delay_ms = {}", config.reveal_delay_ms);
    println!("theme           = {}", config.theme);

    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let path = Config::write_template(force)?;
    println!("Wrote config template to {}", path.display().to_string().cyan());
    Ok(())
}
