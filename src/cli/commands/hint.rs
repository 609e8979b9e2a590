//! Hint command implementation.
//!
//! The `whatlies-extras hint` command prints the message a user gets when
//! an integration is used without its extra, whether or not it is
//! available in this build.

use std::io::Write;

use crate::cli::args::HintArgs;
use crate::error::Result;
use crate::integrations::IntegrationRegistry;

use super::dispatcher::{Command, CommandResult};

/// The hint command implementation.
pub struct HintCommand<'a> {
    registry: &'a IntegrationRegistry,
    args: HintArgs,
}

impl<'a> HintCommand<'a> {
    /// Create a new hint command.
    pub fn new(registry: &'a IntegrationRegistry, args: HintArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for HintCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        match self.registry.placeholder(&self.args.name) {
            Some(placeholder) => {
                writeln!(out, "{}", placeholder.message())?;
                Ok(CommandResult::success())
            }
            None => {
                writeln!(out, "Unknown integration: {}", self.args.name)?;
                Ok(CommandResult::failure(2))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str) -> (CommandResult, String) {
        let registry = IntegrationRegistry::new();
        let cmd = HintCommand::new(
            &registry,
            HintArgs {
                name: name.to_string(),
            },
        );
        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_full_message() {
        let (result, text) = run("fasttext");
        assert!(result.success);
        insta::assert_snapshot!(text, @r"
        In order to use fastText you'll need to install via;

        pip install whatlies[fasttext]

        See installation guide here: https://rasahq.github.io/whatlies/#installation.
        ");
    }

    #[test]
    fn unknown_name_fails() {
        let (result, text) = run("glove");
        assert_eq!(result.exit_code, 2);
        assert!(text.contains("Unknown integration: glove"));
    }
}
