//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CandidatesCommand, CompletionsCommand, ResolveCommand, ShowConfigCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Diagnostic tool for resolving request paths against a content tree.
#[derive(Parser)]
#[command(name = "itemres")]
#[command(
    version,
    about = "Resolve request paths to content-tree nodes",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this resolver configuration file instead of discovering one
    #[arg(long, value_name = "PATH", global = true, env = "ITEMRES_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a request path against a tree fixture
    Resolve(ResolveCommand),

    /// List the direct-lookup candidates for a request
    Candidates(CandidatesCommand),

    /// Validate a resolver configuration file
    Validate(ValidateCommand),

    /// Print the effective resolver configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
