//! Segment-by-segment path resolution.
//!
//! This module provides the `PathResolver` type, which walks a relative
//! path down from a starting node using a [`NameMatcher`].

use crate::matcher::NameMatcher;
use crate::path::normalize::segments;
use crate::tree::{ItemAccessor, Node};

/// Resolves relative paths by matching one segment at a time.
///
/// The walk stops at the first segment that matches no child: there is no
/// backtracking and no partial result. A path with no segments resolves to
/// the starting node itself.
///
/// # Examples
///
/// ```
/// use itemres::matcher::ExactMatcher;
/// use itemres::path::PathResolver;
/// use itemres::trace::NullTracer;
/// use itemres::tree::{ItemAccessor, LookupOptions, MemoryTree, NodeFixture, TreeFixture};
///
/// let tree = MemoryTree::from_fixture(TreeFixture::new(
///     "master",
///     NodeFixture::new("home").with_child(
///         NodeFixture::new("news").with_child(NodeFixture::new("2024").with_display_name("Año 2024")),
///     ),
/// ))
/// .unwrap();
/// let accessor = ItemAccessor::new(&tree, &NullTracer, LookupOptions::new("master"));
/// let home = accessor.get_item("/home").into_node().unwrap();
///
/// let resolver = PathResolver::new(&ExactMatcher);
/// let node = resolver.resolve_from_root(&accessor, &home, "/news/año 2024/").unwrap();
/// assert_eq!(node.path(), "/home/news/2024");
/// assert!(resolver.resolve_from_root(&accessor, &home, "missing/2024").is_none());
/// ```
#[derive(Clone, Copy)]
pub struct PathResolver<'m> {
    matcher: &'m dyn NameMatcher,
}

impl<'m> PathResolver<'m> {
    /// Create a resolver that matches segments with `matcher`.
    #[must_use]
    pub fn new(matcher: &'m dyn NameMatcher) -> Self {
        Self { matcher }
    }

    /// Walk `relative_path` from `root`.
    #[must_use]
    pub fn resolve_from_root(
        &self,
        accessor: &ItemAccessor<'_>,
        root: &Node,
        relative_path: &str,
    ) -> Option<Node> {
        let mut current = root.clone();
        for segment in segments(relative_path) {
            current = self.matcher.find_child(accessor, &current, segment)?;
        }
        Some(current)
    }
}
