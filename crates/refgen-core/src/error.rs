//! Error types and handling for refgen-core operations.
//!
//! A documentation build is treated as all-or-nothing: every fatal error aborts
//! the run, because a partially generated output tree would mask configuration
//! mistakes. Errors therefore carry enough context (page path, entity name,
//! file path) for the user to locate the offending input.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: template reads, output writes, tree sync
//! - **Configuration Errors**: empty pages, placeholder contract violations,
//!   foreign-namespace classes, malformed parameter lists
//! - **Lookup Errors**: page specifications referencing unknown metadata entries
//! - **Serialization Errors**: malformed TOML configuration or JSON manifests

use thiserror::Error;

/// The main error type for refgen-core operations.
///
/// All public functions in refgen-core return `Result<T, Error>`. There is no
/// retry or recovery path: generation either completes or fails with the first
/// error encountered.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers template reads, output-tree writes, directory creation, and the
    /// pre-generation tree sync. The underlying `std::io::Error` is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    ///
    /// Raised when a page specification resolves to zero entities, a template
    /// violates the placeholder contract, a class's module lies outside the
    /// configured namespace, a parameter list interleaves required and
    /// defaulted parameters, or the README lacks a second-level heading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A page specification references a metadata entry that does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization or deserialization failed.
    ///
    /// Occurs when the TOML configuration or the JSON metadata manifest cannot
    /// be parsed. Constructed at the load sites so the message carries the
    /// offending file's path.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Get the error category as a string identifier for logging.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
