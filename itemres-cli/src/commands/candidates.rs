//! Candidates command implementation.
//!
//! Prints the direct-lookup candidate list for a request, one per line,
//! with the rule that produced each path.

use crate::commands::request::RequestArgs;
use crate::error::CliError;
use crate::fixture::Fixture;
use crate::utils::{load_resolver_options, GlobalOptions};
use clap::Args;
use itemres::ItemResolver;
use std::sync::Arc;

/// List the direct-lookup candidates for a request.
#[derive(Args)]
pub struct CandidatesCommand {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Print JSON instead of tab-separated lines
    #[arg(long)]
    pub json: bool,
}

impl CandidatesCommand {
    /// Execute the candidates command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = load_resolver_options(global)?;
        let fixture = Fixture::load(&self.request.tree)?;
        let (ctx, site) = self.request.contexts(&fixture)?;

        let tree = fixture.build_tree()?;
        let resolver = ItemResolver::with_options(Arc::new(tree), options);
        let candidates = resolver.candidates(&ctx, site.as_ref());

        if self.json {
            let json = serde_json::to_string_pretty(&candidates)?;
            println!("{json}");
            return Ok(());
        }

        for candidate in &candidates {
            if global.quiet {
                println!("{}", candidate.path);
            } else {
                println!("{}\t{}", candidate.path, candidate.source);
            }
        }
        Ok(())
    }
}
