use std::io::{self, Write};

use log::debug;

use crate::types::{DependencyGraph, OutputFormat};

pub fn print_graph<W: Write>(
    writer: &mut W,
    format: OutputFormat,
    graph: &DependencyGraph,
) -> io::Result<()> {
    debug!("Printing {} packages as {:?}", graph.len(), format);
    match format {
        OutputFormat::Digraph => print_digraph(writer, graph),
        OutputFormat::Graphviz => print_graphviz(writer, graph),
    }
}

/// Writes one line per package with imports: the package, then each import,
/// every item followed by a space.
pub fn print_digraph<W: Write>(writer: &mut W, graph: &DependencyGraph) -> io::Result<()> {
    for (from, tos) in graph {
        if tos.is_empty() {
            continue;
        }
        write!(writer, "{} ", from)?;
        for to in tos {
            write!(writer, "{} ", to)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn print_graphviz<W: Write>(writer: &mut W, graph: &DependencyGraph) -> io::Result<()> {
    writeln!(writer, "digraph G {{")?;
    for (from, tos) in graph {
        for to in tos {
            writeln!(writer, "{}->{};", from, to)?;
        }
    }
    writeln!(writer, "}}")?;
    Ok(())
}
