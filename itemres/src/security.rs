//! Scoped security bypass and security re-application.
//!
//! Display-name resolution has to find nodes across permission boundaries,
//! so it runs its lookups inside a bypass scope and then re-checks the
//! caller's permissions on the single node it returns, once that scope has
//! closed.
//!
//! The bypass scope is thread-local and counted: scopes nest, and the
//! previous state is restored when the [`SecurityDisabler`] guard drops,
//! including during unwinding. A scope opened on one thread is invisible to
//! every other thread.
//!
//! # Examples
//!
//! ```
//! use itemres::security::{is_bypassed, with_security_bypassed};
//!
//! assert!(!is_bypassed());
//! let inside = with_security_bypassed(is_bypassed);
//! assert!(inside);
//! assert!(!is_bypassed());
//! ```

use std::cell::Cell;
use std::marker::PhantomData;

use log::debug;

use crate::tree::{ItemAccessor, Node};

thread_local! {
    static BYPASS_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Guard that keeps security checks disabled on the current thread while it
/// is alive.
///
/// The guard is neither `Send` nor `Sync`: it must be dropped on the thread
/// that created it.
#[must_use = "security is re-enabled as soon as the guard is dropped"]
pub struct SecurityDisabler {
    _thread_bound: PhantomData<*const ()>,
}

impl SecurityDisabler {
    /// Open a bypass scope on the current thread.
    pub fn enter() -> Self {
        BYPASS_DEPTH.with(|depth| depth.set(depth.get() + 1));
        Self {
            _thread_bound: PhantomData,
        }
    }
}

impl Drop for SecurityDisabler {
    fn drop(&mut self) {
        BYPASS_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Whether a bypass scope is open on the current thread.
#[must_use]
pub fn is_bypassed() -> bool {
    BYPASS_DEPTH.with(|depth| depth.get() > 0)
}

/// Run `action` with security checks disabled on the current thread.
///
/// Enforcement is restored when `action` returns or panics.
pub fn with_security_bypassed<T>(action: impl FnOnce() -> T) -> T {
    let _guard = SecurityDisabler::enter();
    action()
}

/// Re-check the caller's read permission on `node`.
///
/// The check follows the calling thread's security state: a caller that
/// itself holds a bypass scope is not re-gated. Returns `None` when access
/// would be denied.
#[must_use]
pub fn apply_security(accessor: &ItemAccessor<'_>, node: Node) -> Option<Node> {
    if accessor.can_read(&node) {
        Some(node)
    } else {
        debug!(
            "security re-check rejected {} for {}",
            node.path(),
            accessor.principal()
        );
        None
    }
}
