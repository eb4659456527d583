//! Build script for itemres-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("itemres")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve request paths to content-tree nodes")
        .long_about(
            "Diagnostic tool that runs the itemres resolution pipeline against a YAML tree fixture",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Use this resolver configuration file instead of discovering one")
                .value_name("PATH")
                .global(true)
                .env("ITEMRES_CONFIG"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve a request path against a tree fixture")
                .long_about("Run direct lookup, display-name fallback and site start fallback"),
            Command::new("candidates")
                .about("List the direct-lookup candidates for a request")
                .long_about("Print every candidate path in lookup order with its source rule"),
            Command::new("validate")
                .about("Validate a resolver configuration file")
                .long_about("Check an itemres configuration file for errors"),
            Command::new("show-config")
                .about("Print the effective resolver configuration")
                .long_about("Merge defaults, files, environment and print the result as YAML"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("itemres.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
