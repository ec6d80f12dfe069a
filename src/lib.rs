pub mod api;
pub mod cli;
pub mod config;
pub mod render;
pub mod tui;
pub mod workflow;
