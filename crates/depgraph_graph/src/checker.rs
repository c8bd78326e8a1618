use anyhow::Result;
use log::{debug, info};

use depgraph_core::{GoImportExtractor, quote};

use crate::{
    config::Config, diagnostics::Diagnostics, graph::GraphBuilder, types::DependencyGraph,
};

pub fn run_dependency_graph(
    cfg: &mut Config,
    diagnostics: &mut dyn Diagnostics,
) -> Result<DependencyGraph> {
    info!("Building dependency graph of '{}' with depth {}", cfg.package, cfg.depth);

    // Fails before any traversal when GOPATH is missing
    cfg.initialize()?;
    let src_root = cfg.src_root()?.clone();
    debug!("Config: src_root={:?}, format={:?}", src_root, cfg.format);

    let extractor = GoImportExtractor;
    let graph =
        GraphBuilder::new(&src_root, &extractor, diagnostics).build(&cfg.package, cfg.depth)?;

    info!("Dependency graph complete. Visited {} packages", graph.len());
    Ok(quote_packages(graph))
}

/// Quotes every package key so that nodes print the same way as the raw
/// import tokens they point to.
fn quote_packages(graph: DependencyGraph) -> DependencyGraph {
    graph.into_iter().map(|(package, imports)| (quote(&package), imports)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        reporter::print_graph,
        types::{OutputFormat, TokenWarning},
    };
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
    }

    fn config(gopath: Option<&Path>, package: &str, depth: usize) -> Config {
        Config {
            package: package.to_string(),
            depth,
            format: OutputFormat::Digraph,
            gopath: gopath.map(Path::to_path_buf),
            src_root: None,
        }
    }

    #[test]
    fn test_run_against_gopath() {
        let gopath = TempDir::new().unwrap();
        create_test_file(
            gopath.path(),
            "src/example.com/app/main.go",
            "package main\n\nimport (\n\t\"fmt\"\n\t\"example.com/lib\"\n)\n",
        );
        create_test_file(gopath.path(), "src/example.com/lib/lib.go", "package lib\n");

        let mut cfg = config(Some(gopath.path()), "example.com/app", 2);
        let mut warnings: Vec<TokenWarning> = Vec::new();
        let graph = run_dependency_graph(&mut cfg, &mut warnings).unwrap();

        assert_eq!(
            graph["\"example.com/app\""],
            vec!["\"fmt\"".to_string(), "\"example.com/lib\"".to_string()]
        );
        assert!(graph["\"example.com/lib\""].is_empty());
        assert!(graph["\"fmt\""].is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_rendered_nodes_are_quoted() {
        let gopath = TempDir::new().unwrap();
        create_test_file(
            gopath.path(),
            "src/example.com/app/main.go",
            "package main\n\nimport (\n\t\"fmt\"\n\t\"example.com/lib\"\n)\n",
        );
        create_test_file(
            gopath.path(),
            "src/example.com/lib/lib.go",
            "package lib\n\nimport \"strings\"\n",
        );

        let mut cfg = config(Some(gopath.path()), "example.com/app", 3);
        let mut warnings: Vec<TokenWarning> = Vec::new();
        let graph = run_dependency_graph(&mut cfg, &mut warnings).unwrap();

        let render = |format| {
            let mut buf = Vec::new();
            print_graph(&mut buf, format, &graph).unwrap();
            String::from_utf8(buf).unwrap()
        };

        assert_eq!(
            render(OutputFormat::Graphviz),
            "digraph G {\n\
             \"example.com/app\"->\"fmt\";\n\
             \"example.com/app\"->\"example.com/lib\";\n\
             \"example.com/lib\"->\"strings\";\n\
             }\n"
        );
        assert_eq!(
            render(OutputFormat::Digraph),
            "\"example.com/app\" \"fmt\" \"example.com/lib\" \n\
             \"example.com/lib\" \"strings\" \n"
        );
    }

    #[test]
    fn test_run_requires_gopath() {
        let mut cfg = config(None, "example.com/app", 2);
        let mut warnings: Vec<TokenWarning> = Vec::new();
        assert!(run_dependency_graph(&mut cfg, &mut warnings).is_err());
        assert!(cfg.src_root.is_none());
    }

    #[test]
    fn test_run_depth_zero() {
        let gopath = TempDir::new().unwrap();
        let mut cfg = config(Some(gopath.path()), "example.com/app", 0);
        let mut warnings: Vec<TokenWarning> = Vec::new();
        let graph = run_dependency_graph(&mut cfg, &mut warnings).unwrap();
        assert!(graph.is_empty());
    }
}
