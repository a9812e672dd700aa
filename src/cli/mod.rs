//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod check;
pub mod range;

pub use check::{handle_check_command, CheckArgs, OutputFormat};
pub use range::{handle_range_command, RangeArgs};
