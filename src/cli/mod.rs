//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the reporting facade.

pub mod data;
pub mod report;

pub use data::{handle_data_command, DataCommands};
pub use report::{handle_report_command, ReportCommands};
