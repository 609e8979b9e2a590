//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::load_config;
use crate::error::Result;
use crate::integrations::IntegrationRegistry;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing user-facing output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Build the registry with the configured install hint.
    pub fn registry(&self, cli: &Cli) -> Result<IntegrationRegistry> {
        let config = load_config(&self.project_root, cli.config.as_deref())?;
        Ok(IntegrationRegistry::new().with_hint(config.install_hint))
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let registry = self.registry(cli)?;

        match &cli.command {
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(&registry, args.clone());
                cmd.execute(out)
            }
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(&registry, args.clone());
                cmd.execute(out)
            }
            Commands::Hint(args) => {
                let cmd = super::hint::HintCommand::new(&registry, args.clone());
                cmd.execute(out)
            }
        }
    }
}
