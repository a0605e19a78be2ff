//! Graphviz DOT sink — serialize a subgraph as DOT source.
//!
//! Produces a `digraph` script that any Graphviz toolchain can turn into
//! SVG/PNG. This crate stops at the source text; `export("dot")` returns
//! the bytes and every other format is the renderer's problem.
//!
//! ```text
//! kintree Subgraph → render_subgraph() → DotRenderer → dot -Tsvg
//! ```

use std::io::Write;

use crate::model::MemberId;
use crate::render::RenderSink;
use crate::{Error, Result};

/// DOT source builder implementing `RenderSink`.
///
/// Nodes, edges, and rank groups are buffered in emission order and
/// assembled into one `digraph` on export.
#[derive(Debug, Default)]
pub struct DotRenderer {
    nodes: Vec<String>,
    edges: Vec<String>,
    ranks: Vec<String>,
}

impl DotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The assembled DOT source.
    pub fn source(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph FamilyTree {\n");
        out.push_str("  rankdir=TB;\n");
        out.push_str("  node [shape=box];\n");
        for line in &self.nodes {
            out.push_str(line);
        }
        for line in &self.edges {
            out.push_str(line);
        }
        for line in &self.ranks {
            out.push_str(line);
        }
        out.push_str("}\n");
        out
    }

    /// Write the DOT source into a writer.
    pub fn write_to(&self, writer: &mut dyn Write) -> Result<()> {
        writer.write_all(self.source().as_bytes())?;
        Ok(())
    }
}

impl RenderSink for DotRenderer {
    fn add_node(&mut self, id: MemberId, label: &str) {
        self.nodes
            .push(format!("  \"{}\" [label=\"{}\"];\n", id, escape(label)));
    }

    fn add_edge(&mut self, from: MemberId, to: MemberId, label: &str, directed: bool) {
        let attrs = if directed {
            format!("label=\"{}\"", escape(label))
        } else {
            format!("label=\"{}\", dir=none", escape(label))
        };
        self.edges
            .push(format!("  \"{}\" -> \"{}\" [{}];\n", from, to, attrs));
    }

    fn group_same_rank(&mut self, ids: &[MemberId]) {
        let inner: Vec<String> = ids.iter().map(|id| format!("\"{id}\";")).collect();
        self.ranks
            .push(format!("  {{ rank=same; {} }}\n", inner.join(" ")));
    }

    fn export(&self, format: &str) -> Result<Vec<u8>> {
        match format {
            "dot" => Ok(self.source().into_bytes()),
            other => Err(Error::RenderError(format!(
                "format '{other}' not supported, image encoding is external (use 'dot')"
            ))),
        }
    }
}

/// Escape a label for a double-quoted DOT string.
fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
