use clap::{Parser, Subcommand};

use super::commands::compare::CompareCommands;
use super::commands::config::ConfigCommands;
use super::commands::tui::TuiCommands;

#[derive(Parser)]
#[command(name = "doccmp")]
#[command(about = "Compare two documents through a comparison service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two documents and print the result
    Compare(CompareCommands),
    /// Launch the interactive TUI
    Tui(TuiCommands),
    /// Configuration management
    Config(ConfigCommands),
}
