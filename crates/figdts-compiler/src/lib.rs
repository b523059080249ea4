//! figdts compiler: scripting API documentation to TypeScript declarations.
//!
//! This crate provides the compilation pipeline:
//! - `ast` - declaration tree and `.d.ts` printer
//! - `builder` - identifier and type construction with safety checks
//! - `overrides` - precise types for loosely documented members
//! - `inherit` - ancestor walking and inherited-method removal
//! - `generate` - per-entity generators
//! - `compile` - the driver producing one declaration unit
//! - `diagnostics` - warning and error reporting

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod builder;
pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod generate;
pub mod inherit;
pub mod overrides;

#[cfg(test)]
pub mod test_utils;


pub use compile::{Compilation, compile, compile_json};
pub use config::Config;
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use overrides::Overrides;

/// Errors that can occur before compilation starts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The documentation export is not valid JSON of the expected shape.
    #[error("invalid documentation: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
