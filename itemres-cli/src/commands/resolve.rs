//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which runs the full
//! resolution pipeline for one request and reports the outcome.

use crate::commands::request::RequestArgs;
use crate::error::CliError;
use crate::fixture::Fixture;
use crate::utils::{load_resolver_options, GlobalOptions};
use clap::{Args, ValueEnum};
use itemres::{ItemResolver, Resolution};
use std::sync::Arc;

/// Resolve a request path against a tree fixture.
#[derive(Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Do not fall back to the site start path
    #[arg(long)]
    pub no_site_start: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for the resolve command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key: value` line per field
    Text,
    /// JSON object
    Json,
}

impl ResolveCommand {
    /// Execute the resolve command.
    ///
    /// Exits with a semantic failure when no node is resolved.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration and fixture
        let options = load_resolver_options(global)?;
        let fixture = Fixture::load(&self.request.tree)?;
        let tree = fixture.build_tree()?;

        // 2. Build the request
        let (ctx, site) = self.request.contexts(&fixture)?;
        let mut ctx = ctx.with_site_start_path(!self.no_site_start);

        // 3. Resolve
        let resolver = ItemResolver::with_options(Arc::new(tree), options);
        let resolution = resolver.resolve(&mut ctx, site.as_ref());

        // 4. Report
        match self.format {
            OutputFormat::Text => print_text(&resolution, global),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&resolution)?;
                println!("{json}");
            }
        }

        if resolution.node().is_none() {
            let reason = if resolution.permission_denied() {
                "permission denied"
            } else {
                "no matching node"
            };
            return Err(CliError::SemanticFailure(format!(
                "{} did not resolve ({reason})",
                ctx.item_path()
            )));
        }
        Ok(())
    }
}

fn print_text(resolution: &Resolution, global: &GlobalOptions) {
    let Some(node) = resolution.node() else {
        if !global.quiet {
            println!("node: (none)");
            println!("lookups: {}", resolution.lookups());
        }
        return;
    };

    println!("path: {}", node.path());
    if global.quiet {
        return;
    }
    println!("id: {}", node.id().as_str());
    println!("display name: {}", node.display_name());
    if let Some(stage) = resolution.stage() {
        println!("stage: {stage}");
    }
    if let Some(winning_path) = resolution.winning_path() {
        println!("via: {winning_path}");
    }
    println!("lookups: {}", resolution.lookups());
}
