//! Depth-limited import dependency graphs of Go packages.
//!
//! Starting from one package under `$GOPATH/src`, this crate reads the import
//! declarations of every `.go` file in the package directory, records them as
//! edges and follows them to further packages until the configured depth is
//! exhausted. The resulting graph can be printed as an edge list or as a
//! Graphviz `digraph`.
//!
//! # Examples
//!
//! ```no_run
//! use depgraph_graph::{Config, LogDiagnostics, OutputFormat, print_graph, run_dependency_graph};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut cfg = Config {
//!     package: "github.com/google/btree".to_string(),
//!     depth: 2,
//!     format: OutputFormat::Graphviz,
//!     gopath: Some(std::path::PathBuf::from("/home/me/go")),
//!     src_root: None,
//! };
//!
//! let mut diagnostics = LogDiagnostics::default();
//! let graph = run_dependency_graph(&mut cfg, &mut diagnostics)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! print_graph(&mut stdout, cfg.format, &graph)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod diagnostics;
mod graph;
mod reporter;
mod types;

// Re-export public API
pub use checker::run_dependency_graph;
pub use config::Config;
pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use graph::GraphBuilder;
pub use reporter::{print_digraph, print_graph, print_graphviz};
pub use types::{DependencyGraph, OutputFormat, TokenWarning};
