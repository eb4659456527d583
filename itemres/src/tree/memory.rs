//! In-memory content tree.
//!
//! [`MemoryTree`] implements [`TreeStore`] over a tree described by a
//! [`TreeFixture`], which can be written in YAML:
//!
//! ```yaml
//! database: master
//! root:
//!   name: sitecore
//!   id: "{11111111-1111-1111-1111-111111111111}"
//!   children:
//!     - name: content
//!       children:
//!         - name: news
//!           display_name: News
//!           display_names: { es: Noticias }
//!         - name: intranet
//!           readers: [editor]
//! ```
//!
//! Paths are matched case-insensitively. When siblings share a name, path
//! lookups return the first one in tree order. Nodes without an explicit id
//! get a generated `{node-N}` id.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::normalize::SEPARATOR;
use crate::tree::{Lookup, LookupOptions, Node, NodeId, SecurityMode, TreeStore};

fn default_database() -> String {
    "master".to_string()
}

/// Serializable description of a whole tree.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TreeFixture {
    /// Name of the tree (database) the nodes live in.
    #[serde(default = "default_database")]
    pub database: String,
    /// The single root node.
    pub root: NodeFixture,
}

impl TreeFixture {
    /// Describe a tree named `database` with the given root.
    #[must_use]
    pub fn new(database: impl Into<String>, root: NodeFixture) -> Self {
        Self {
            database: database.into(),
            root,
        }
    }
}

/// Serializable description of one node and its subtree.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NodeFixture {
    /// Canonical name.
    pub name: String,
    /// Explicit id; generated when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name for languages without a specific entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Display names keyed by language.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub display_names: HashMap<String, String>,
    /// Principals allowed to read the node; everyone when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readers: Option<Vec<String>>,
    /// Children in tree order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeFixture>,
}

impl NodeFixture {
    /// A readable node with no children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            display_name: None,
            display_names: HashMap::new(),
            readers: None,
            children: Vec::new(),
        }
    }

    /// Set an explicit id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the language-independent display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the display name for one language.
    #[must_use]
    pub fn with_display_name_in(
        mut self,
        language: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        self.display_names
            .insert(language.into(), display_name.into());
        self
    }

    /// Restrict reading to the given principals.
    #[must_use]
    pub fn with_readers<I, S>(mut self, readers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.readers = Some(readers.into_iter().map(Into::into).collect());
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: NodeFixture) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Debug)]
struct Entry {
    id: NodeId,
    name: String,
    path: String,
    display_name: Option<String>,
    display_names: HashMap<String, String>,
    readers: Option<Vec<String>>,
    children: Vec<usize>,
}

/// A [`TreeStore`] held entirely in memory.
#[derive(Debug)]
pub struct MemoryTree {
    database: String,
    entries: Vec<Entry>,
    by_path: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
}

impl MemoryTree {
    /// Build a tree from a fixture.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFixture`] if a name is empty or contains `/`,
    /// or if two nodes share an id.
    pub fn from_fixture(fixture: TreeFixture) -> Result<Self> {
        if fixture.database.trim().is_empty() {
            return Err(Error::InvalidFixture {
                reason: "database name cannot be empty".to_string(),
            });
        }

        let mut tree = Self {
            database: fixture.database,
            entries: Vec::new(),
            by_path: HashMap::new(),
            by_id: HashMap::new(),
        };
        let mut seen_ids = HashSet::new();
        tree.insert(fixture.root, "", &mut seen_ids)?;
        Ok(tree)
    }

    /// Parse a YAML fixture and build the tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the fixture is invalid.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let fixture: TreeFixture = serde_yaml::from_str(yaml)?;
        Self::from_fixture(fixture)
    }

    /// Read a YAML fixture from disk and build the tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or on any error from
    /// [`MemoryTree::from_yaml_str`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Name of the tree (database).
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no nodes. Always false for a built tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(
        &mut self,
        fixture: NodeFixture,
        parent_path: &str,
        seen_ids: &mut HashSet<String>,
    ) -> Result<usize> {
        if fixture.name.is_empty() || fixture.name.contains(SEPARATOR) {
            return Err(Error::InvalidFixture {
                reason: format!(
                    "invalid node name '{}' under '{parent_path}'",
                    fixture.name
                ),
            });
        }

        let index = self.entries.len();
        let path = format!("{parent_path}{SEPARATOR}{}", fixture.name);
        let id = fixture.id.unwrap_or_else(|| format!("{{node-{index}}}"));
        if !seen_ids.insert(id.to_lowercase()) {
            return Err(Error::InvalidFixture {
                reason: format!("duplicate id {id}"),
            });
        }

        self.by_id.insert(id.to_lowercase(), index);
        self.by_path.entry(path.to_lowercase()).or_insert(index);
        self.entries.push(Entry {
            id: NodeId::new(id),
            name: fixture.name,
            path: path.clone(),
            display_name: fixture.display_name,
            display_names: fixture.display_names,
            readers: fixture.readers,
            children: Vec::new(),
        });

        for child in fixture.children {
            let child_index = self.insert(child, &path, seen_ids)?;
            self.entries[index].children.push(child_index);
        }

        Ok(index)
    }

    fn find_path(&self, path: &str) -> Option<usize> {
        let trimmed = path.trim_end_matches(SEPARATOR);
        if trimmed.is_empty() || !trimmed.starts_with(SEPARATOR) {
            return None;
        }
        self.by_path.get(&trimmed.to_lowercase()).copied()
    }

    fn find_id(&self, id: &str) -> Option<usize> {
        self.by_id.get(&id.to_lowercase()).copied()
    }

    fn find(&self, path_or_id: &str) -> Option<usize> {
        if path_or_id.starts_with('{') {
            self.find_id(path_or_id)
        } else {
            self.find_path(path_or_id)
        }
    }

    fn index_of(&self, node: &Node) -> Option<usize> {
        self.find_id(node.id().as_str())
    }

    fn readable(&self, index: usize, principal: &str) -> bool {
        match &self.entries[index].readers {
            None => true,
            Some(readers) => readers
                .iter()
                .any(|reader| reader.eq_ignore_ascii_case(principal)),
        }
    }

    fn materialize(&self, index: usize, options: &LookupOptions) -> Node {
        let entry = &self.entries[index];
        let display_name = options
            .language
            .as_ref()
            .and_then(|language| entry.display_names.get(language))
            .or(entry.display_name.as_ref())
            .unwrap_or(&entry.name);
        Node::new(entry.id.clone(), entry.name.clone(), entry.path.clone())
            .with_display_name(display_name.clone())
    }

    fn lookup(&self, index: Option<usize>, options: &LookupOptions) -> Lookup {
        if options.database != self.database {
            return Lookup::NotFound;
        }
        match index {
            None => Lookup::NotFound,
            Some(index)
                if options.security == SecurityMode::Enforce
                    && !self.readable(index, &options.principal) =>
            {
                Lookup::Denied
            }
            Some(index) => Lookup::Found(self.materialize(index, options)),
        }
    }
}

impl TreeStore for MemoryTree {
    fn get_item(&self, path: &str, options: &LookupOptions) -> Lookup {
        self.lookup(self.find(path), options)
    }

    fn get_item_by_id(&self, root_segment: &str, options: &LookupOptions) -> Lookup {
        self.lookup(self.find(root_segment), options)
    }

    fn children(&self, parent: &Node, options: &LookupOptions) -> Vec<Node> {
        if options.database != self.database {
            return Vec::new();
        }
        let Some(index) = self.index_of(parent) else {
            return Vec::new();
        };
        self.entries[index]
            .children
            .iter()
            .copied()
            .filter(|&child| {
                options.security == SecurityMode::Bypass
                    || self.readable(child, &options.principal)
            })
            .map(|child| self.materialize(child, options))
            .collect()
    }

    fn can_read(&self, node: &Node, options: &LookupOptions) -> bool {
        if options.security == SecurityMode::Bypass {
            return true;
        }
        self.index_of(node)
            .is_some_and(|index| self.readable(index, &options.principal))
    }
}
