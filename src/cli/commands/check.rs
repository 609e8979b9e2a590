//! Check command implementation.
//!
//! The `whatlies-extras check` command fails with install instructions
//! for every named integration that is not available.

use std::io::Write;

use crate::cli::args::CheckArgs;
use crate::error::{Result, WhatliesError};
use crate::integrations::IntegrationRegistry;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    registry: &'a IntegrationRegistry,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(registry: &'a IntegrationRegistry, args: CheckArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        // Unknown names are a usage error; report them before anything else.
        let unknown: Vec<&str> = self
            .args
            .names
            .iter()
            .map(String::as_str)
            .filter(|name| self.registry.get(name).is_none())
            .collect();
        if !unknown.is_empty() {
            writeln!(out, "Unknown integration(s): {}", unknown.join(", "))?;
            writeln!(
                out,
                "Known integrations: {}",
                self.registry.known_names().join(", ")
            )?;
            return Ok(CommandResult::failure(2));
        }

        let mut missing = 0;
        for name in &self.args.names {
            match self.registry.require(name) {
                Ok(integration) => {
                    writeln!(out, "{} is available", integration.tool)?;
                }
                Err(WhatliesError::MissingDependency { message, .. }) => {
                    if missing > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "{}", message)?;
                    missing += 1;
                }
                Err(e) => return Err(e),
            }
        }

        if missing > 0 {
            tracing::debug!("{} integration(s) missing", missing);
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
