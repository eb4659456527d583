#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # itemres
//!
//! Resolves an inbound request path to at most one node of a hierarchical
//! content tree.
//!
//! A request is resolved in three stages: a direct lookup over a fixed list
//! of candidate paths, a segment-by-segment walk that also matches display
//! names, and finally the site's start path. Permission checks are applied
//! throughout; the display-name walk runs inside a per-thread security
//! bypass scope and only its single result is re-checked.
//!
//! ## Core Types
//!
//! - [`ItemResolver`] and [`Resolution`]: the resolution pipeline
//! - [`RequestContext`] and [`SiteContext`]: per-request and per-site inputs
//! - [`TreeStore`] and [`MemoryTree`]: the content-tree contract and an
//!   in-memory implementation
//! - [`NameMatcher`]: segment matching strategies
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use itemres::{ItemResolver, MemoryTree, RequestContext, SiteContext};
//!
//! let tree = MemoryTree::from_yaml_str(
//!     "database: master\n\
//!      root:\n  name: sitecore\n  children:\n    - name: content\n      children:\n        - name: home\n",
//! )
//! .unwrap();
//! let resolver = ItemResolver::new(Arc::new(tree));
//! let site = SiteContext::new("website", "/sitecore/content", "/home");
//!
//! let mut ctx = RequestContext::new("/home")
//!     .with_local_path("/home")
//!     .with_database("master");
//! resolver.resolve(&mut ctx, Some(&site));
//!
//! assert_eq!(ctx.resolved().unwrap().path(), "/sitecore/content/home");
//! ```

pub mod candidates;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod path;
pub mod resolver;
pub mod security;
pub mod trace;
pub mod tree;

// Re-export key types at crate root for convenience
pub use candidates::{Candidate, CandidateGenerator, CandidateSource};
pub use config::{Config, ConfigBuilder, NameReplacement};
pub use context::{RequestContext, SiteContext};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use matcher::{matcher_for, ExactMatcher, FuzzyStrategy, MatchMode, MixedMatcher, NameMatcher};
pub use path::{NameCodec, PathResolver};
pub use resolver::{ItemResolver, Resolution, ResolverOptions, Stage};
pub use security::{apply_security, with_security_bypassed, SecurityDisabler};
pub use trace::{LogTracer, NullTracer, RecordingTracer, Tracer};
pub use tree::{ItemAccessor, Lookup, LookupOptions, MemoryTree, Node, NodeId, TreeStore};
