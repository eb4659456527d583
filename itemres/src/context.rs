//! Per-request and per-site inputs to resolution.
//!
//! Both are passed explicitly to [`crate::resolver::ItemResolver::resolve`].
//! The request context is also where the outcome is published: its resolved
//! slot is written exactly once.

use log::debug;

use crate::path::normalize::{make_path, SEPARATOR};
use crate::tree::{LookupOptions, Node, ANONYMOUS};

/// State of one inbound request.
///
/// # Examples
///
/// ```
/// use itemres::context::RequestContext;
///
/// let ctx = RequestContext::new("/sitecore/content/home")
///     .with_local_path("/home")
///     .with_database("master")
///     .with_user("editor");
///
/// assert_eq!(ctx.principal(), "editor");
/// assert!(ctx.use_site_start_path());
/// assert!(!ctx.is_resolved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    item_path: String,
    local_path: String,
    database: Option<String>,
    user: Option<String>,
    language: Option<String>,
    use_site_start_path: bool,
    permission_denied: bool,
    resolved: Option<Node>,
    published: bool,
}

impl RequestContext {
    /// Create a context for the raw URL item path.
    ///
    /// The local path is empty, there is no target tree, the principal is
    /// anonymous and falling back to the site start path is allowed.
    #[must_use]
    pub fn new(item_path: impl Into<String>) -> Self {
        Self {
            item_path: item_path.into(),
            local_path: String::new(),
            database: None,
            user: None,
            language: None,
            use_site_start_path: true,
            permission_denied: false,
            resolved: None,
            published: false,
        }
    }

    /// Set the path relative to the site root.
    #[must_use]
    pub fn with_local_path(mut self, local_path: impl Into<String>) -> Self {
        self.local_path = local_path.into();
        self
    }

    /// Set the target tree. Without one, resolution does nothing.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the requesting user.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the content language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Allow or forbid falling back to the site start path.
    #[must_use]
    pub fn with_site_start_path(mut self, allowed: bool) -> Self {
        self.use_site_start_path = allowed;
        self
    }

    /// Mark the request as already denied by an earlier pipeline step.
    #[must_use]
    pub fn with_permission_denied(mut self) -> Self {
        self.permission_denied = true;
        self
    }

    /// Record a node resolved by an earlier pipeline step.
    ///
    /// Resolution is then a no-op for this request.
    #[must_use]
    pub fn with_resolved(mut self, node: Node) -> Self {
        self.resolved = Some(node);
        self.published = true;
        self
    }

    /// Raw URL item path.
    #[must_use]
    pub fn item_path(&self) -> &str {
        &self.item_path
    }

    /// Raw path relative to the site root.
    #[must_use]
    pub fn local_path(&self) -> &str {
        &self.local_path
    }

    /// Target tree name, if any.
    #[must_use]
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Requesting principal; anonymous when no user is set.
    #[must_use]
    pub fn principal(&self) -> &str {
        self.user.as_deref().unwrap_or(ANONYMOUS)
    }

    /// Content language; `None` means current.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Whether falling back to the site start path is allowed.
    #[must_use]
    pub fn use_site_start_path(&self) -> bool {
        self.use_site_start_path
    }

    /// Whether a lookup for this request signaled permission-denied.
    #[must_use]
    pub fn permission_denied(&self) -> bool {
        self.permission_denied
    }

    /// The resolved node, if any.
    #[must_use]
    pub fn resolved(&self) -> Option<&Node> {
        self.resolved.as_ref()
    }

    /// Whether the resolved slot has been written.
    ///
    /// A slot written with "no node" counts as resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.published
    }

    /// Lookup options for this request, or `None` without a target tree.
    #[must_use]
    pub fn lookup_options(&self) -> Option<LookupOptions> {
        let database = self.database.as_deref()?;
        Some(
            LookupOptions::new(database)
                .with_principal(self.principal())
                .with_language(self.language.clone()),
        )
    }

    pub(crate) fn mark_permission_denied(&mut self) {
        self.permission_denied = true;
    }

    /// Write the resolved slot. Returns `false` if it was already written.
    pub(crate) fn publish(&mut self, node: Option<Node>) -> bool {
        if self.published {
            debug!("resolved slot for {} already written", self.item_path);
            return false;
        }
        self.resolved = node;
        self.published = true;
        true
    }
}

/// Configuration of the site serving a request. Read-only to the resolver.
///
/// # Examples
///
/// ```
/// use itemres::context::SiteContext;
///
/// let site = SiteContext::new("website", "/sitecore/content", "/home");
/// assert_eq!(site.start_path(), "/sitecore/content/home");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    name: String,
    root_path: String,
    start_item: String,
    start_path: String,
}

impl SiteContext {
    /// Create a site whose start path is the root path joined with the
    /// start item.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        root_path: impl Into<String>,
        start_item: impl Into<String>,
    ) -> Self {
        let root_path = root_path.into();
        let start_item = start_item.into();
        let start_path = make_path(&root_path, &start_item, SEPARATOR);
        Self {
            name: name.into(),
            root_path,
            start_item,
            start_path,
        }
    }

    /// Override the start path.
    #[must_use]
    pub fn with_start_path(mut self, start_path: impl Into<String>) -> Self {
        self.start_path = start_path.into();
        self
    }

    /// Site name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the site root node.
    #[must_use]
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// Start item, relative to the root path.
    #[must_use]
    pub fn start_item(&self) -> &str {
        &self.start_item
    }

    /// Absolute path of the start item.
    #[must_use]
    pub fn start_path(&self) -> &str {
        &self.start_path
    }
}
