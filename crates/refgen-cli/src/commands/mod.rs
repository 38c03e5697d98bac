//! Command implementations for the refgen CLI.

pub mod build;
pub mod check;
