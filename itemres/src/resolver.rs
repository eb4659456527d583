//! Request path resolution.
//!
//! [`ItemResolver`] turns a request into at most one node of the content
//! tree. It runs three stages in order and stops at the first that yields a
//! node:
//!
//! 1. **Direct lookup**: every candidate path (see [`crate::candidates`]) is
//!    handed to the tree store with security enforced.
//! 2. **Display-name fallback**: entered when nothing was found or the hit
//!    is a `*` wildcard node. The path is walked segment by segment with the
//!    configured [`NameMatcher`], inside a security bypass scope; the result
//!    is then re-checked against the caller's permissions.
//! 3. **Site start fallback**: the site's start path, when the request
//!    permits it and no lookup was denied.
//!
//! The outcome is written once to the request's resolved slot. Finding
//! nothing is not an error.

use std::fmt;
use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::candidates::{Candidate, CandidateGenerator};
use crate::config::{Config, ConfigBuilder, NameReplacement};
use crate::context::{RequestContext, SiteContext};
use crate::matcher::{matcher_for, FuzzyStrategy, MatchMode, NameMatcher};
use crate::path::normalize::split_root_segment;
use crate::path::{NameCodec, PathResolver};
use crate::security::{apply_security, with_security_bypassed};
use crate::trace::{LogTracer, OperationScope, Tracer};
use crate::tree::{ItemAccessor, Lookup, Node, TreeStore};

/// Typed resolver settings, derived from a merged [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// How path segments are matched against children.
    pub match_mode: MatchMode,
    /// Fuzzy fallback used by [`MatchMode::Mixed`].
    pub fuzzy: FuzzyStrategy,
    /// Run the display-name fallback stage.
    pub display_name_fallback: bool,
    /// Allow the site start fallback stage (the request must allow it too).
    pub site_start_fallback: bool,
    /// Generate cross-product candidates when the local path is `/`.
    pub cross_product_for_root_local_path: bool,
    /// URL name replacements used for decoding.
    pub name_replacements: Vec<NameReplacement>,
}

impl ResolverOptions {
    /// Settings from `config`; unset fields take the built-in defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemres::config::Config;
    /// use itemres::resolver::ResolverOptions;
    ///
    /// let options = ResolverOptions::from_config(&Config {
    ///     site_start_fallback: Some(false),
    ///     ..Default::default()
    /// });
    /// assert!(!options.site_start_fallback);
    /// assert!(options.display_name_fallback);
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = ConfigBuilder::defaults();
        Self {
            match_mode: config.match_mode(),
            fuzzy: config.fuzzy_strategy(),
            display_name_fallback: config
                .display_name_fallback
                .or(defaults.display_name_fallback)
                .unwrap_or(true),
            site_start_fallback: config
                .site_start_fallback
                .or(defaults.site_start_fallback)
                .unwrap_or(true),
            cross_product_for_root_local_path: config
                .cross_product_for_root_local_path
                .or(defaults.cross_product_for_root_local_path)
                .unwrap_or(true),
            name_replacements: config.name_replacements.clone().unwrap_or_default(),
        }
    }
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self::from_config(&ConfigBuilder::defaults())
    }
}

/// The stage that produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// A candidate path was found directly.
    DirectLookup,
    /// A segment walk matched names or display names.
    DisplayName,
    /// The site start path.
    SiteStart,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectLookup => write!(f, "direct-lookup"),
            Self::DisplayName => write!(f, "display-name"),
            Self::SiteStart => write!(f, "site-start"),
        }
    }
}

/// Report of one [`ItemResolver::resolve`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    node: Option<Node>,
    winning_path: Option<String>,
    stage: Option<Stage>,
    lookups: usize,
    permission_denied: bool,
    skipped: bool,
}

impl Resolution {
    fn skipped(ctx: &RequestContext) -> Self {
        Self {
            node: ctx.resolved().cloned(),
            winning_path: None,
            stage: None,
            lookups: 0,
            permission_denied: ctx.permission_denied(),
            skipped: true,
        }
    }

    /// The resolved node.
    #[must_use]
    pub fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    /// The path string that produced the node.
    #[must_use]
    pub fn winning_path(&self) -> Option<&str> {
        self.winning_path.as_deref()
    }

    /// The stage that produced the node.
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    /// Number of store lookups by path or id.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups
    }

    /// Whether a lookup signaled permission-denied.
    #[must_use]
    pub fn permission_denied(&self) -> bool {
        self.permission_denied
    }

    /// Whether resolution did not run (already resolved, no target tree or
    /// empty item path).
    #[must_use]
    pub fn was_skipped(&self) -> bool {
        self.skipped
    }
}

/// A node together with how it was found.
struct Hit {
    node: Node,
    path: String,
    stage: Stage,
}

/// Resolves request paths against a tree store.
///
/// The resolver holds no per-request state and can be shared between
/// threads.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use itemres::context::{RequestContext, SiteContext};
/// use itemres::resolver::{ItemResolver, Stage};
/// use itemres::tree::{MemoryTree, NodeFixture, TreeFixture};
///
/// let tree = MemoryTree::from_fixture(TreeFixture::new(
///     "master",
///     NodeFixture::new("sitecore").with_child(
///         NodeFixture::new("content")
///             .with_child(NodeFixture::new("news").with_display_name("Noticias")),
///     ),
/// ))
/// .unwrap();
/// let resolver = ItemResolver::new(Arc::new(tree));
/// let site = SiteContext::new("website", "/sitecore/content", "");
///
/// let mut ctx = RequestContext::new("/Noticias")
///     .with_local_path("/Noticias")
///     .with_database("master");
/// let resolution = resolver.resolve(&mut ctx, Some(&site));
///
/// assert_eq!(resolution.stage(), Some(Stage::DisplayName));
/// assert_eq!(ctx.resolved().unwrap().path(), "/sitecore/content/news");
/// ```
pub struct ItemResolver {
    store: Arc<dyn TreeStore>,
    tracer: Arc<dyn Tracer>,
    matcher: Box<dyn NameMatcher>,
    codec: NameCodec,
    options: ResolverOptions,
}

impl ItemResolver {
    /// Create a resolver with default options that traces to the `log`
    /// facade.
    #[must_use]
    pub fn new(store: Arc<dyn TreeStore>) -> Self {
        Self::with_options(store, ResolverOptions::default())
    }

    /// Create a resolver with explicit options.
    #[must_use]
    pub fn with_options(store: Arc<dyn TreeStore>, options: ResolverOptions) -> Self {
        Self {
            store,
            tracer: Arc::new(LogTracer),
            matcher: matcher_for(options.match_mode, options.fuzzy),
            codec: NameCodec::new(options.name_replacements.clone()),
            options,
        }
    }

    /// Send diagnostics to `tracer`.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Arc<dyn Tracer>) -> Self {
        self.tracer = tracer;
        self
    }

    /// Replace the matcher selected from the options.
    #[must_use]
    pub fn with_matcher(mut self, matcher: Box<dyn NameMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// The resolver's settings.
    #[must_use]
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// The codec used to decode request paths.
    #[must_use]
    pub fn codec(&self) -> &NameCodec {
        &self.codec
    }

    fn generator(&self) -> CandidateGenerator<'_> {
        CandidateGenerator::new(&self.codec)
            .with_cross_product_for_root_local_path(self.options.cross_product_for_root_local_path)
    }

    /// The direct-lookup candidates for a request, in lookup order.
    #[must_use]
    pub fn candidates(&self, ctx: &RequestContext, site: Option<&SiteContext>) -> Vec<Candidate> {
        self.generator().generate(ctx, site)
    }

    /// Resolve the request and publish the outcome to its resolved slot.
    ///
    /// Does nothing when the request is already resolved, has no target
    /// tree or has an empty item path; the report is then marked skipped.
    pub fn resolve(&self, ctx: &mut RequestContext, site: Option<&SiteContext>) -> Resolution {
        if ctx.is_resolved() || ctx.item_path().is_empty() {
            return Resolution::skipped(ctx);
        }
        let Some(options) = ctx.lookup_options() else {
            return Resolution::skipped(ctx);
        };

        let _scope = OperationScope::start(self.tracer.as_ref(), "resolve item");
        let accessor = ItemAccessor::new(self.store.as_ref(), self.tracer.as_ref(), options);

        let mut hit = self.direct_lookup(&accessor, ctx, site);

        if self.options.display_name_fallback
            && hit.as_ref().map_or(true, |hit| hit.node.is_wildcard())
        {
            if let Some(by_display_name) = self.display_name_lookup(&accessor, ctx, site) {
                // The walk can land on the wildcard node itself
                let same_node = hit
                    .as_ref()
                    .is_some_and(|hit| hit.node.id() == by_display_name.node.id());
                if !same_node {
                    hit = Some(by_display_name);
                }
            }
        }

        if hit.is_none()
            && self.options.site_start_fallback
            && ctx.use_site_start_path()
            && !ctx.permission_denied()
        {
            if let Some(site) = site {
                hit = Self::site_start_lookup(&accessor, site);
            }
        }

        if let Some(ref hit) = hit {
            self.tracer.trace(&format!(
                "resolved {} to {} via {} ({})",
                ctx.item_path(),
                hit.node.path(),
                hit.path,
                hit.stage
            ));
        } else {
            debug!("no node for {}", ctx.item_path());
        }

        let (node, winning_path, stage) = match hit {
            Some(hit) => (Some(hit.node), Some(hit.path), Some(hit.stage)),
            None => (None, None, None),
        };
        ctx.publish(node.clone());

        Resolution {
            node,
            winning_path,
            stage,
            lookups: accessor.lookups(),
            permission_denied: ctx.permission_denied(),
            skipped: false,
        }
    }

    /// Try every candidate with security enforced.
    ///
    /// Only the first candidate is tried once permission-denied has been
    /// signaled.
    fn direct_lookup(
        &self,
        accessor: &ItemAccessor<'_>,
        ctx: &mut RequestContext,
        site: Option<&SiteContext>,
    ) -> Option<Hit> {
        for (index, candidate) in self.generator().generate(ctx, site).into_iter().enumerate() {
            if index > 0 && ctx.permission_denied() {
                debug!("permission denied, skipping remaining candidates");
                break;
            }
            match accessor.get_item(&candidate.path) {
                Lookup::Found(node) => {
                    return Some(Hit {
                        node,
                        path: candidate.path,
                        stage: Stage::DirectLookup,
                    })
                }
                Lookup::Denied => ctx.mark_permission_denied(),
                Lookup::NotFound => {}
            }
        }
        None
    }

    /// Walk the request paths by name and display name.
    ///
    /// Lookups run with security bypassed; the single result is re-checked
    /// under the caller's own security state. A rejected result counts as
    /// not found and flags the request as denied.
    fn display_name_lookup(
        &self,
        accessor: &ItemAccessor<'_>,
        ctx: &mut RequestContext,
        site: Option<&SiteContext>,
    ) -> Option<Hit> {
        let _scope = OperationScope::start(self.tracer.as_ref(), "display name fallback");
        let walker = PathResolver::new(self.matcher.as_ref());
        let request: &RequestContext = ctx;

        let hit = with_security_bypassed(|| {
            self.walk_from_site_root(accessor, &walker, request, site)
                .or_else(|| self.walk_from_root_segment(accessor, &walker, request.item_path()))
                .or_else(|| self.walk_from_root_segment(accessor, &walker, request.local_path()))
        })?;

        match apply_security(accessor, hit.node) {
            Some(node) => Some(Hit { node, ..hit }),
            None => {
                ctx.mark_permission_denied();
                None
            }
        }
    }

    /// Resolve the decoded local path from the site root node.
    fn walk_from_site_root(
        &self,
        accessor: &ItemAccessor<'_>,
        walker: &PathResolver<'_>,
        ctx: &RequestContext,
        site: Option<&SiteContext>,
    ) -> Option<Hit> {
        let site = site?;
        if ctx.local_path().is_empty() {
            return None;
        }
        let root = accessor.get_item(site.root_path()).into_node()?;
        let local_path = self.codec.decode_name(ctx.local_path());
        let node = walker.resolve_from_root(accessor, &root, &local_path)?;
        Some(Hit {
            node,
            path: local_path,
            stage: Stage::DisplayName,
        })
    }

    /// Locate the first segment of `path` as a root, then walk the rest.
    fn walk_from_root_segment(
        &self,
        accessor: &ItemAccessor<'_>,
        walker: &PathResolver<'_>,
        path: &str,
    ) -> Option<Hit> {
        let (root_segment, rest) = split_root_segment(path)?;
        let root = accessor.get_item_by_id(root_segment)?;
        let rest = self.codec.decode_name(rest);
        let node = walker.resolve_from_root(accessor, &root, &rest)?;
        Some(Hit {
            node,
            path: path.to_string(),
            stage: Stage::DisplayName,
        })
    }

    fn site_start_lookup(accessor: &ItemAccessor<'_>, site: &SiteContext) -> Option<Hit> {
        let node = accessor.get_item(site.start_path()).into_node()?;
        Some(Hit {
            node,
            path: site.start_path().to_string(),
            stage: Stage::SiteStart,
        })
    }
}
