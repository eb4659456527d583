//! Main entry point for the itemres CLI.
//!
//! This is a diagnostic harness around the itemres resolver. It loads a
//! YAML tree fixture and runs the resolution pipeline against it:
//! - `resolve`: Resolve a request path to a node
//! - `candidates`: List the direct-lookup candidates for a request
//! - `validate`: Validate a resolver configuration file
//! - `show-config`: Print the effective configuration

mod cli;
mod commands;
mod error;
mod fixture;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = itemres::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Candidates(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
