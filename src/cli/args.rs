//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// whatlies-extras - Inspect optional backends and their install hints.
#[derive(Debug, Parser)]
#[command(name = "whatlies-extras")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .whatlies/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List optional integrations and whether they are available
    List(ListArgs),

    /// Fail with install instructions if an integration is missing
    Check(CheckArgs),

    /// Print the message shown when an integration is missing
    Hint(HintArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Only show integrations that are not available
    #[arg(long)]
    pub missing: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Integration names to check
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Arguments for the `hint` command.
#[derive(Debug, Clone, clap::Args)]
pub struct HintArgs {
    /// Integration name
    pub name: String,
}
