//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::models::{DEFAULT_COMPILER, DEFAULT_SOURCE_DIR};
use crate::provision::ProvisionConfig;

/// Post-installation provisioning for the Rp-Bp pipeline.
#[derive(Debug, Parser)]
#[command(name = "rpbp-provision")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory compiled models are cached in (defaults to the per-user data directory)
    #[arg(long, global = true, env = "RPBP_MODELS_BASE", value_name = "DIR")]
    pub models_base: Option<PathBuf>,

    /// Directory holding model definitions
    #[arg(
        long,
        global = true,
        env = "RPBP_MODELS_SOURCE",
        value_name = "DIR",
        default_value = DEFAULT_SOURCE_DIR
    )]
    pub models_source: PathBuf,

    /// Model compiler executable, invoked as `<compiler> <definition> <artifact>`
    #[arg(
        long,
        global = true,
        env = "RPBP_MODEL_COMPILER",
        value_name = "PROGRAM",
        default_value = DEFAULT_COMPILER
    )]
    pub compiler: String,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Fold model-location flags and per-command options into a run config.
    pub fn provision_config(&self, dry_run: bool) -> ProvisionConfig {
        ProvisionConfig {
            models_base: self.models_base.clone(),
            source_dir: self.models_source.clone(),
            compiler: self.compiler.clone(),
            dry_run,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile models and check required tools (default if no command specified)
    Provision(ProvisionArgs),

    /// Show artifact and tool status without changing anything
    Status(StatusArgs),

    /// List the model catalog and required tool groups
    List,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `provision` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProvisionArgs {
    /// Show what would be compiled without running the compiler
    #[arg(long)]
    pub dry_run: bool,

    /// Exit non-zero if any model failed to compile or any tool is missing
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
