//! Common test utilities for integration tests.
//!
//! This module provides the standard content tree used across the
//! resolution tests, plus a store wrapper that records every lookup.

use std::sync::{Arc, Mutex};

use itemres::tree::{Lookup, LookupOptions, MemoryTree, Node, NodeFixture, TreeFixture, TreeStore};
use itemres::{ItemResolver, RequestContext, SiteContext};

/// Database name used by every fixture.
pub const DATABASE: &str = "master";

/// The standard tree:
///
/// ```text
/// /sitecore {root}
///   content
///     home
///       news            (display name "Home News")
///     news              (display name "Noticias", Spanish "Noticias", Danish "Nyheder")
///     products
///       *
///       widget          (display name "Super Widget")
///     about us
///     café
///     intranet          (display name "Staff", readers: editor)
///       reports
/// ```
#[allow(dead_code)]
pub fn standard_fixture() -> TreeFixture {
    TreeFixture::new(
        DATABASE,
        NodeFixture::new("sitecore").with_id("{root}").with_child(
            NodeFixture::new("content")
                .with_child(
                    NodeFixture::new("home")
                        .with_id("{home}")
                        .with_child(NodeFixture::new("news").with_display_name("Home News")),
                )
                .with_child(
                    NodeFixture::new("news")
                        .with_id("{news}")
                        .with_display_name("Noticias")
                        .with_display_name_in("da", "Nyheder"),
                )
                .with_child(
                    NodeFixture::new("products")
                        .with_child(NodeFixture::new("*").with_id("{wildcard}"))
                        .with_child(
                            NodeFixture::new("widget")
                                .with_id("{widget}")
                                .with_display_name("Super Widget"),
                        ),
                )
                .with_child(NodeFixture::new("about us"))
                .with_child(NodeFixture::new("café"))
                .with_child(
                    NodeFixture::new("intranet")
                        .with_display_name("Staff")
                        .with_readers(["editor"])
                        .with_child(NodeFixture::new("reports")),
                ),
        ),
    )
}

/// The standard tree, shared.
#[allow(dead_code)]
pub fn standard_tree() -> Arc<MemoryTree> {
    Arc::new(MemoryTree::from_fixture(standard_fixture()).expect("standard fixture is valid"))
}

/// A resolver with default options over the standard tree.
#[allow(dead_code)]
pub fn standard_resolver() -> ItemResolver {
    ItemResolver::new(standard_tree())
}

/// The `website` site: root `/sitecore/content`, start item `/home`.
#[allow(dead_code)]
pub fn website() -> SiteContext {
    SiteContext::new("website", "/sitecore/content", "/home")
}

/// A request against the standard database with item and local path set.
#[allow(dead_code)]
pub fn request(item_path: &str, local_path: &str) -> RequestContext {
    RequestContext::new(item_path)
        .with_local_path(local_path)
        .with_database(DATABASE)
}

/// A store that forwards to another store and records each call.
#[allow(dead_code)]
pub struct RecordingStore<S> {
    inner: S,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl<S: TreeStore> RecordingStore<S> {
    /// Wrap `inner`.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Recorded calls as `get_item <path>`, `get_item_by_id <segment>`,
    /// `children <path>` and `can_read <path>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Paths passed to `get_item`, in call order.
    pub fn paths_looked_up(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| call.strip_prefix("get_item ").map(str::to_string))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl<S: TreeStore> TreeStore for RecordingStore<S> {
    fn get_item(&self, path: &str, options: &LookupOptions) -> Lookup {
        self.record(format!("get_item {path}"));
        self.inner.get_item(path, options)
    }

    fn get_item_by_id(&self, root_segment: &str, options: &LookupOptions) -> Lookup {
        self.record(format!("get_item_by_id {root_segment}"));
        self.inner.get_item_by_id(root_segment, options)
    }

    fn children(&self, parent: &Node, options: &LookupOptions) -> Vec<Node> {
        self.record(format!("children {}", parent.path()));
        self.inner.children(parent, options)
    }

    fn can_read(&self, node: &Node, options: &LookupOptions) -> bool {
        self.record(format!("can_read {}", node.path()));
        self.inner.can_read(node, options)
    }
}
