use anyhow::Result;
use log::{debug, trace};
use std::{collections::BTreeSet, path::Path};

use depgraph_core::{ImportExtractor, resolve, unquote};

use crate::{
    diagnostics::Diagnostics,
    types::{DependencyGraph, TokenWarning},
};

/// Depth-limited walk of the import graph rooted at a package.
pub struct GraphBuilder<'a> {
    src_root: &'a Path,
    extractor: &'a dyn ImportExtractor,
    diagnostics: &'a mut dyn Diagnostics,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(
        src_root: &'a Path,
        extractor: &'a dyn ImportExtractor,
        diagnostics: &'a mut dyn Diagnostics,
    ) -> Self {
        Self { src_root, extractor, diagnostics }
    }

    /// Builds the dependency graph of `root`, exploring at most `max_depth`
    /// levels of packages.
    ///
    /// A depth of 0 yields an empty graph, 1 records only the imports of
    /// `root` itself. On failure the partially built graph is discarded.
    pub fn build(&mut self, root: &str, max_depth: usize) -> Result<DependencyGraph> {
        let mut graph = DependencyGraph::new();
        self.visit(&mut graph, root, max_depth)?;
        debug!("Built dependency graph with {} packages", graph.len());
        Ok(graph)
    }

    /// Records the imports of `package` into `graph` and recurses into them
    /// with one less level of depth.
    ///
    /// Packages already present in `graph` are left untouched. Entries written
    /// before an error are kept in `graph`.
    pub fn visit(
        &mut self,
        graph: &mut DependencyGraph,
        package: &str,
        depth: usize,
    ) -> Result<()> {
        if depth == 0 {
            trace!("Depth exhausted at '{}'", package);
            return Ok(());
        }
        if graph.contains_key(package) {
            trace!("Already visited '{}'", package);
            return Ok(());
        }

        // Reserve the slot first so that cyclic imports terminate
        graph.insert(package.to_string(), Vec::new());

        let Some(specs) = resolve(self.src_root, package, self.extractor)? else {
            return Ok(());
        };

        let mut next = BTreeSet::new();
        let mut edges = Vec::with_capacity(specs.len());
        for spec in specs {
            match unquote(&spec.request) {
                Ok(import_path) => {
                    next.insert(import_path);
                }
                Err(error) => self.diagnostics.token_warning(TokenWarning {
                    package: package.to_string(),
                    token: spec.request.clone(),
                    line: spec.line,
                    error,
                }),
            }
            edges.push(spec.request);
        }

        if let Some(slot) = graph.get_mut(package) {
            slot.extend(edges);
        }

        trace!("Package '{}' leads to {} distinct packages", package, next.len());
        for import_path in &next {
            self.visit(graph, import_path, depth - 1)?;
        }

        Ok(())
    }
}
