//! Error types for the itemres library.
//!
//! Resolution itself never fails: a lookup that finds nothing is ordinary
//! control flow and is modelled with `Option` and [`crate::tree::Lookup`].
//! This error hierarchy covers the ambient layers around the resolver:
//! configuration, tree fixtures and I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an itemres error.
///
/// # Examples
///
/// ```
/// use itemres::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("/sitecore/content")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the itemres library.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A tree fixture is structurally invalid.
    #[error("invalid tree fixture: {reason}")]
    InvalidFixture {
        /// Why the fixture was rejected.
        reason: String,
    },

    /// A named resource (site, file) was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A configuration file path does not exist.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        /// The missing path.
        path: PathBuf,
    },
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemres::Error;
    ///
    /// let err = Error::NotFound { resource: "site 'intranet'".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::ConfigNotFound { .. })
    }

    /// Check if error originates from configuration handling.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::Validation { .. } | Self::ConfigNotFound { .. }
        )
    }
}
