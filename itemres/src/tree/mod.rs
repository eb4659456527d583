//! Content tree access.
//!
//! The content tree is owned by an external storage engine. This module
//! defines the contract the resolver consumes ([`TreeStore`]), the node
//! handle it reads ([`Node`]), a per-request wrapper that applies the
//! request's lookup options ([`ItemAccessor`]), and an in-memory store used
//! by tests and the diagnostic CLI ([`MemoryTree`]).
//!
//! # Examples
//!
//! ```
//! use itemres::tree::{Lookup, LookupOptions, MemoryTree, NodeFixture, TreeFixture, TreeStore};
//!
//! let tree = MemoryTree::from_fixture(TreeFixture::new(
//!     "master",
//!     NodeFixture::new("sitecore").with_child(NodeFixture::new("content")),
//! ))
//! .unwrap();
//!
//! let options = LookupOptions::new("master");
//! assert!(matches!(tree.get_item("/sitecore/content", &options), Lookup::Found(_)));
//! assert_eq!(tree.get_item("/sitecore/missing", &options), Lookup::NotFound);
//! ```

mod accessor;
pub mod memory;

use std::fmt;

use serde::Serialize;

pub use accessor::ItemAccessor;
pub use memory::{MemoryTree, NodeFixture, TreeFixture};

/// Principal used when a request carries no user.
pub const ANONYMOUS: &str = "anonymous";

/// Identity of a node, usable for direct lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap a store-specific identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A read-only handle to a node in the content tree.
///
/// The display name is already resolved for the language the node was
/// looked up in. Canonical names are not unique among siblings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    id: NodeId,
    name: String,
    display_name: String,
    path: String,
}

impl Node {
    /// Create a node handle whose display name equals its name.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemres::tree::{Node, NodeId};
    ///
    /// let node = Node::new(NodeId::new("{1}"), "news", "/sitecore/content/news")
    ///     .with_display_name("Noticias");
    /// assert_eq!(node.display_name(), "Noticias");
    /// assert!(!node.is_wildcard());
    /// ```
    #[must_use]
    pub fn new(id: NodeId, name: impl Into<String>, path: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            display_name: name.clone(),
            name,
            path: path.into(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Node identity.
    #[must_use]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-facing, language-dependent name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Absolute path built from canonical names.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this node is a `*` placeholder.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.name == crate::path::normalize::WILDCARD
    }
}

/// Outcome of a single store lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// A node exists at the address and may be read.
    Found(Node),
    /// Nothing exists at the address.
    NotFound,
    /// A node exists but the principal may not read it.
    Denied,
}

impl Lookup {
    /// The found node, if any.
    #[must_use]
    pub fn into_node(self) -> Option<Node> {
        match self {
            Self::Found(node) => Some(node),
            Self::NotFound | Self::Denied => None,
        }
    }

    /// Whether the lookup signaled permission-denied.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }
}

/// Whether a lookup checks the principal's permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityMode {
    /// Check permissions (the default).
    #[default]
    Enforce,
    /// Skip permission checks for this lookup only.
    Bypass,
}

/// Which version of a node to read. Resolution always reads the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemVersion {
    /// The latest version.
    #[default]
    Latest,
}

/// Options passed with every store lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOptions {
    /// Target tree (database) name.
    pub database: String,
    /// Content language; `None` means the store's current language.
    pub language: Option<String>,
    /// Item version to read.
    pub version: ItemVersion,
    /// Security mode for this lookup.
    pub security: SecurityMode,
    /// Principal whose permissions apply.
    pub principal: String,
}

impl LookupOptions {
    /// Options for the given tree with current language, latest version,
    /// enforced security and the anonymous principal.
    #[must_use]
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            language: None,
            version: ItemVersion::Latest,
            security: SecurityMode::Enforce,
            principal: ANONYMOUS.to_string(),
        }
    }

    /// Set the principal.
    #[must_use]
    pub fn with_principal(mut self, principal: impl Into<String>) -> Self {
        self.principal = principal.into();
        self
    }

    /// Set the content language.
    #[must_use]
    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    /// Set the security mode.
    #[must_use]
    pub fn with_security(mut self, security: SecurityMode) -> Self {
        self.security = security;
        self
    }
}

/// Contract of the external content-tree storage engine.
///
/// Implementations only read; the resolver never mutates the tree.
/// Absence is reported as [`Lookup::NotFound`], never as an error.
#[cfg_attr(test, mockall::automock)]
pub trait TreeStore: Send + Sync {
    /// Look up a node by absolute path or id.
    ///
    /// With [`SecurityMode::Enforce`] an unreadable node is reported as
    /// [`Lookup::Denied`].
    fn get_item(&self, path: &str, options: &LookupOptions) -> Lookup;

    /// Look up a node treating `root_segment` (for example `/sitecore`) as a
    /// root or database-level identifier.
    fn get_item_by_id(&self, root_segment: &str, options: &LookupOptions) -> Lookup;

    /// Children of `parent` in tree order.
    ///
    /// With [`SecurityMode::Enforce`] unreadable children are omitted.
    fn children(&self, parent: &Node, options: &LookupOptions) -> Vec<Node>;

    /// Whether `options.principal` may read `node`.
    fn can_read(&self, node: &Node, options: &LookupOptions) -> bool;
}
