//! Tree fixture files used by the diagnostic commands.
//!
//! A fixture holds the content tree together with the sites that serve it:
//!
//! ```yaml
//! database: master
//! tree:
//!   name: sitecore
//!   children:
//!     - name: content
//!       children:
//!         - name: home
//! sites:
//!   - name: website
//!     root_path: /sitecore/content
//!     start_item: /home
//! ```

use crate::error::CliError;
use itemres::tree::{MemoryTree, NodeFixture, TreeFixture};
use itemres::{Error, SiteContext};
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn default_database() -> String {
    "master".to_string()
}

/// A site entry in a fixture file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteFixture {
    /// Site name, used by `--site`.
    pub name: String,
    /// Path of the site root node.
    pub root_path: String,
    /// Start item relative to the root path.
    #[serde(default)]
    pub start_item: String,
    /// Explicit start path, overriding root path + start item.
    #[serde(default)]
    pub start_path: Option<String>,
}

impl SiteFixture {
    /// Convert into the resolver's site context.
    pub fn to_context(&self) -> SiteContext {
        let site = SiteContext::new(&self.name, &self.root_path, &self.start_item);
        match &self.start_path {
            Some(start_path) => site.with_start_path(start_path),
            None => site,
        }
    }
}

/// Contents of a fixture file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    /// Tree (database) name.
    #[serde(default = "default_database")]
    pub database: String,
    /// Root node of the tree.
    pub tree: NodeFixture,
    /// Sites served from the tree.
    #[serde(default)]
    pub sites: Vec<SiteFixture>,
}

impl Fixture {
    /// Read and parse a fixture file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "Fixture not found: {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse fixture YAML.
    pub fn parse(yaml: &str) -> Result<Self, CliError> {
        serde_yaml::from_str(yaml).map_err(|e| {
            CliError::Library(Error::InvalidFixture {
                reason: e.to_string(),
            })
        })
    }

    /// Build the in-memory tree.
    pub fn build_tree(&self) -> Result<MemoryTree, CliError> {
        let tree = MemoryTree::from_fixture(TreeFixture::new(&self.database, self.tree.clone()))?;
        Ok(tree)
    }

    /// Look up a site by name.
    ///
    /// Without a name, the only site of a single-site fixture is used;
    /// otherwise no site applies.
    pub fn site(&self, name: Option<&str>) -> Result<Option<SiteContext>, CliError> {
        match name {
            Some(name) => self
                .sites
                .iter()
                .find(|site| site.name == name)
                .map(|site| Some(site.to_context()))
                .ok_or_else(|| {
                    CliError::Library(Error::NotFound {
                        resource: format!("site '{name}'"),
                    })
                }),
            None if self.sites.len() == 1 => Ok(self.sites.first().map(SiteFixture::to_context)),
            None => Ok(None),
        }
    }
}
