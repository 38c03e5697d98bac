//! # refgen-core
//!
//! Core functionality for refgen - a reference-documentation generator driven
//! by explicit library metadata.
//!
//! refgen turns a JSON metadata manifest (classes, functions, module exports),
//! a declarative set of page specifications, and a tree of markdown templates
//! into a generated documentation tree. It never runs or inspects the
//! documented library's code; the manifest is the only contract.
//!
//! ## Architecture
//!
//! The pipeline runs leaves-first:
//!
//! - **Metadata**: descriptor model and qualified-name lookups
//! - **Signature**: call-signature reconstruction with default rendering
//! - **Ancestry**: ancestor chains for docstring-inheritance lookups
//! - **Docstring**: pattern-based reformatting into the markdown dialect
//! - **Links**: documentation and source URL derivation
//! - **Assembler**: page resolution, block rendering, template merge
//! - **Tree**: output-tree reset, template copy, README stitch
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use refgen_core::{generate, GeneratorConfig, Result};
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let config = GeneratorConfig::load(Path::new("refgen.toml"))?;
//!     let summary = generate::run(&config)?;
//!     println!("generated {} pages", summary.pages);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure policy
//!
//! A documentation build is all-or-nothing. A page resolving to zero
//! entities, a template violating the placeholder contract, or a class
//! outside the configured namespace each abort the entire run; partial
//! output trees are never considered valid.

/// Ancestor-chain computation for inheritance lookups
pub mod ancestry;
/// Page assembly and template merging
pub mod assembler;
/// TOML configuration model
pub mod config;
/// Docstring reformatting pipeline
pub mod docstring;
/// Error types and result aliases
pub mod error;
/// End-to-end generation pipeline
pub mod generate;
/// Documentation and source URL derivation
pub mod links;
/// Library metadata descriptors and manifest loading
pub mod metadata;
/// Per-entity markdown block rendering
pub mod render;
/// Call-signature reconstruction
pub mod signature;
/// Output-tree preparation
pub mod tree;

// Re-export commonly used types
pub use assembler::{merge_template, PageAssembler};
pub use config::{CopySpec, GeneratorConfig, PageSpec, PathsConfig, RenderConfig};
pub use docstring::DocstringKind;
pub use error::{Error, Result};
pub use generate::Summary;
pub use links::LinkConfig;
pub use metadata::{ClassMeta, FunctionMeta, Library, LibraryMetadata, ModuleMeta, Param};
pub use render::{BlockKind, RenderedBlock};
pub use signature::CallableSignature;
pub use tree::TreeSync;
