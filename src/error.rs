//! Error types for the storefront library.
//!
//! None of these are fatal: callers degrade to a fallback (default variant,
//! inline error text, unchanged form) instead of aborting the session.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised when turning external text into a [`crate::Variant`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The identifier is not one of `theme1`, `theme2`, `theme3`.
    #[error("unknown theme variant '{0}'")]
    UnknownVariant(String),
}

/// Errors produced while reading a product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Validation failures for the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}
