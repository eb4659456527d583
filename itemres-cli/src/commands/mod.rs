//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve a request path against a tree fixture
//! - `candidates`: List the direct-lookup candidates for a request
//! - `validate`: Validate a resolver configuration file
//! - `show_config`: Print the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod candidates;
pub mod completions;
pub mod request;
pub mod resolve;
pub mod show_config;
pub mod validate;

pub use candidates::CandidatesCommand;
pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use show_config::ShowConfigCommand;
pub use validate::ValidateCommand;
