//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], which loads configuration and builds
//! the integration registry once for every subcommand.

pub mod check;
pub mod dispatcher;
pub mod hint;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
