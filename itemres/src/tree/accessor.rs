//! Per-request view of a [`TreeStore`].

use std::cell::Cell;

use crate::security;
use crate::trace::Tracer;
use crate::tree::{Lookup, LookupOptions, Node, SecurityMode, TreeStore};

/// Applies one request's lookup options to a store.
///
/// The effective security mode of a lookup is [`SecurityMode::Bypass`] when
/// a bypass scope is open on the current thread (see [`crate::security`]),
/// and [`SecurityMode::Enforce`] otherwise. The same rule applies to
/// permission re-checks through [`ItemAccessor::can_read`].
pub struct ItemAccessor<'a> {
    store: &'a dyn TreeStore,
    tracer: &'a dyn Tracer,
    options: LookupOptions,
    lookups: Cell<usize>,
}

impl<'a> ItemAccessor<'a> {
    /// Wrap `store` with the request's base options.
    #[must_use]
    pub fn new(store: &'a dyn TreeStore, tracer: &'a dyn Tracer, options: LookupOptions) -> Self {
        Self {
            store,
            tracer,
            options,
            lookups: Cell::new(0),
        }
    }

    /// The principal lookups are performed for.
    #[must_use]
    pub fn principal(&self) -> &str {
        &self.options.principal
    }

    /// Number of store lookups performed so far.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    fn effective_options(&self) -> LookupOptions {
        let security = if security::is_bypassed() {
            SecurityMode::Bypass
        } else {
            SecurityMode::Enforce
        };
        self.options.clone().with_security(security)
    }

    fn count(&self) {
        self.lookups.set(self.lookups.get() + 1);
    }

    /// Look up a node by absolute path or id.
    pub fn get_item(&self, path: &str) -> Lookup {
        self.count();
        let options = self.effective_options();
        let lookup = self.store.get_item(path, &options);
        self.tracer.trace(&format!(
            "get_item {path} ({:?}): {}",
            options.security,
            describe(&lookup)
        ));
        lookup
    }

    /// Look up a root-level node by its root segment.
    pub fn get_item_by_id(&self, root_segment: &str) -> Option<Node> {
        self.count();
        let options = self.effective_options();
        let lookup = self.store.get_item_by_id(root_segment, &options);
        self.tracer.trace(&format!(
            "get_item_by_id {root_segment} ({:?}): {}",
            options.security,
            describe(&lookup)
        ));
        lookup.into_node()
    }

    /// Children of `parent` in tree order.
    pub fn children(&self, parent: &Node) -> Vec<Node> {
        self.store.children(parent, &self.effective_options())
    }

    /// Whether the request's principal may read `node` under the current
    /// thread's security state.
    pub fn can_read(&self, node: &Node) -> bool {
        self.store.can_read(node, &self.effective_options())
    }
}

fn describe(lookup: &Lookup) -> &str {
    match lookup {
        Lookup::Found(node) => node.path(),
        Lookup::NotFound => "not found",
        Lookup::Denied => "permission denied",
    }
}
