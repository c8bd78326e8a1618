use clap::ValueEnum;
use depgraph_core::UnquoteError;
use indexmap::IndexMap;
use std::fmt;

/// Package identifier mapped to the raw import tokens declared by its files,
/// in the order packages were visited.
pub type DependencyGraph = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per package: the package followed by its imports
    Digraph,
    /// A Graphviz `digraph` block
    Graphviz,
}

/// An import token that could not be decoded into a package identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWarning {
    pub package: String,
    pub token: String,
    /// Line of the token in its source file
    pub line: usize,
    pub error: UnquoteError,
}

impl fmt::Display for TokenWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: line {}: cannot unquote import {}: {}",
            self.package, self.line, self.token, self.error
        )
    }
}
