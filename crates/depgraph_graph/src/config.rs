use anyhow::{Result, anyhow};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use crate::types::OutputFormat;

#[derive(Debug, Clone, Parser)]
#[command(name = "depgraph")]
#[command(about = "Print the import dependency graph of a Go package")]
pub struct Config {
    /// Import path of the package to analyze, e.g. github.com/google/btree
    pub package: String,

    /// Max depth of dependency tree
    #[arg(long, default_value_t = 2)]
    pub depth: usize,

    /// Output format for the dependency graph
    #[arg(long, value_enum, default_value_t = OutputFormat::Digraph)]
    pub format: OutputFormat,

    /// Go workspace; packages are looked up under <GOPATH>/src
    #[arg(long, env = "GOPATH", hide_env_values = true)]
    pub gopath: Option<PathBuf>,

    #[clap(skip)]
    pub src_root: Option<PathBuf>,
}

impl Config {
    /// Initialize the config by resolving the source root from `GOPATH`
    pub fn initialize(&mut self) -> Result<()> {
        debug!("Resolving source root from GOPATH={:?}", self.gopath);
        let root = depgraph_core::source_root(self.gopath.as_deref())?;
        info!("Using source root: {}", root.display());
        self.src_root = Some(root);
        Ok(())
    }

    /// Get the source root, returning an error if not initialized
    pub fn src_root(&self) -> Result<&PathBuf> {
        self.src_root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}
