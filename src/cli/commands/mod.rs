pub mod compare;
pub mod config;
pub mod tui;

pub use compare::{handle_compare_command, CompareCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use tui::{tui_command, TuiCommands};
