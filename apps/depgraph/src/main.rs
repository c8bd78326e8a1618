use anyhow::Result;
use clap::Parser;
use depgraph_graph::{Config, LogDiagnostics};
use env_logger::Env;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

fn main() -> Result<()> {
    // Token warnings are shown by default; RUST_LOG overrides the filter.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let mut cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    let start = Instant::now();

    let mut diagnostics = LogDiagnostics::default();
    let graph = depgraph_graph::run_dependency_graph(&mut cfg, &mut diagnostics)?;

    info!(
        "Visited {} packages in {}ms ({} undecodable imports)",
        graph.len(),
        start.elapsed().as_millis(),
        diagnostics.warnings
    );

    depgraph_graph::print_graph(&mut stdout, cfg.format, &graph)?;
    stdout.flush()?;

    Ok(())
}
