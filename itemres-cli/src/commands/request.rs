//! Request arguments shared by `resolve` and `candidates`.

use crate::error::CliError;
use crate::fixture::Fixture;
use clap::Args;
use itemres::{RequestContext, SiteContext};
use std::path::PathBuf;

/// Describes the request to run against a fixture.
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Tree fixture file (YAML)
    #[arg(long, value_name = "FIXTURE")]
    pub tree: PathBuf,

    /// Raw item path of the request (URL-encoded as received)
    #[arg(value_name = "ITEM_PATH")]
    pub item_path: String,

    /// Path relative to the site root (defaults to the item path when a
    /// site applies)
    #[arg(long, value_name = "PATH")]
    pub local_path: Option<String>,

    /// Site from the fixture serving the request
    #[arg(long, value_name = "NAME")]
    pub site: Option<String>,

    /// Requesting user (anonymous when omitted)
    #[arg(long, value_name = "USER")]
    pub user: Option<String>,

    /// Content language
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,
}

impl RequestArgs {
    /// Build the request and site contexts from the fixture.
    pub fn contexts(
        &self,
        fixture: &Fixture,
    ) -> Result<(RequestContext, Option<SiteContext>), CliError> {
        let site = fixture.site(self.site.as_deref())?;

        let local_path = match (&self.local_path, &site) {
            (Some(local_path), _) => local_path.clone(),
            (None, Some(_)) => self.item_path.clone(),
            (None, None) => String::new(),
        };

        let mut ctx = RequestContext::new(&self.item_path)
            .with_local_path(local_path)
            .with_database(&fixture.database);
        if let Some(ref user) = self.user {
            ctx = ctx.with_user(user);
        }
        if let Some(ref language) = self.language {
            ctx = ctx.with_language(language);
        }
        Ok((ctx, site))
    }
}
