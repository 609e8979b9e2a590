//! Command-line interface for whatlies-extras.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, HintArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
