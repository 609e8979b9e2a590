//! List command implementation.
//!
//! The `whatlies-extras list` command lists optional integrations.

use std::io::Write;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::integrations::{Integration, IntegrationRegistry};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    registry: &'a IntegrationRegistry,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(registry: &'a IntegrationRegistry, args: ListArgs) -> Self {
        Self { registry, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn selected(&self) -> Vec<&'a Integration> {
        self.registry
            .iter()
            .filter(|i| !self.args.missing || !i.available)
            .collect()
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let integrations = self.selected();

        if self.args.json {
            let json = serde_json::to_string_pretty(&integrations).map_err(anyhow::Error::from)?;
            writeln!(out, "{}", json)?;
            return Ok(CommandResult::success());
        }

        if integrations.is_empty() {
            writeln!(out, "No integrations to show.")?;
            return Ok(CommandResult::success());
        }

        let name_width = integrations.iter().map(|i| i.name.len()).max().unwrap_or(0);
        for integration in integrations {
            let status = if integration.available {
                "available"
            } else {
                "missing"
            };
            writeln!(
                out,
                "  {:<width$}  {:<9}  {} (extra: {})",
                integration.name,
                status,
                integration.tool,
                integration.extra,
                width = name_width
            )?;
        }

        Ok(CommandResult::success())
    }
}
