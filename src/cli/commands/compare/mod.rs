pub mod handler;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

pub use handler::handle_compare_command;

#[derive(Args)]
pub struct CompareCommands {
    /// Template document (PDF, JPEG, PNG, TIFF, or plain text, up to 20 MB)
    pub file1: PathBuf,

    /// Comparison document
    pub file2: PathBuf,

    /// Base URL of the comparison service (overrides env and config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print the raw comparison result as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Save the rendered result to a file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How much of the result to print
    #[arg(long, default_value = "verbose")]
    pub style: ReportStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportStyle {
    /// Similarity score and summary only
    Minimal,
    /// Full report: documents, differences, structure
    Verbose,
}
