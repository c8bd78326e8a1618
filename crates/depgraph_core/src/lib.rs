//! Core utilities for depgraph.
//!
//! This crate provides the leaf functionality for reading Go packages off disk:
//! - Extracting import declarations from `.go` files
//! - Unquoting raw import tokens into package identifiers
//! - Resolving a package identifier to its directory and source files
//! - Locating the source root from `GOPATH`

mod config;
mod constants;
mod parser;
mod resolver;
mod types;
mod unquote;

// Re-export public API
pub use config::source_root;
pub use constants::{GO_EXTENSION, GOPATH_ENV, SRC_DIR};
pub use parser::{GoImportExtractor, ImportExtractor, SyntaxError, parse_imports};
pub use resolver::{package_dir, resolve, source_files};
pub use types::Specifier;
pub use unquote::{UnquoteError, quote, unquote};
