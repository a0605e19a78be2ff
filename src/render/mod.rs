//! # Render Adapter
//!
//! Translates a selected node/edge subset into calls against an external
//! diagramming sink. The adapter decides WHAT to draw — one node per
//! member, parent edges, spouse groupings — and the sink decides how the
//! picture is produced. Image encoding stays outside the crate; the
//! bundled `DotRenderer` sink emits Graphviz DOT source.

pub mod dot;

use crate::model::MemberId;
use crate::select::Subgraph;
use crate::Result;

pub use dot::DotRenderer;

/// How parent/child relations are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeStyle {
    /// One directed edge per relation, parent → child, labeled "parent".
    #[default]
    Single,
    /// Additionally draw the reversed child → parent edge labeled "child".
    DualLabel,
}

/// The contract with a diagramming sink.
pub trait RenderSink {
    /// Declare a node. Called exactly once per member in the subset.
    fn add_node(&mut self, id: MemberId, label: &str);

    /// Declare an edge between two already-declared nodes.
    fn add_edge(&mut self, from: MemberId, to: MemberId, label: &str, directed: bool);

    /// Request same-rank layout for a group of nodes (married couples).
    fn group_same_rank(&mut self, ids: &[MemberId]);

    /// Produce the rendered artifact in the given format.
    fn export(&self, format: &str) -> Result<Vec<u8>>;
}

/// Emit a subgraph into a sink.
///
/// Guarantees: one `add_node` per member, never a duplicate; one directed
/// "parent" edge per parent → child pair (plus the reversed "child" edge in
/// `DualLabel` mode); one same-rank grouping and one undirected "spouse"
/// edge per married pair. Nothing referencing a member outside the subset
/// is ever emitted — the `Subgraph` invariant already scopes every edge to
/// members of the subset.
pub fn render_subgraph<S: RenderSink>(
    subgraph: &Subgraph,
    sink: &mut S,
    style: EdgeStyle,
) -> Result<()> {
    for member in &subgraph.members {
        sink.add_node(member.id, &member.full_name());
    }

    for &(parent, child) in &subgraph.parent_edges {
        sink.add_edge(parent, child, "parent", true);
        if style == EdgeStyle::DualLabel {
            sink.add_edge(child, parent, "child", true);
        }
    }

    for &(a, b) in &subgraph.spouse_edges {
        sink.group_same_rank(&[a, b]);
        sink.add_edge(a, b, "spouse", false);
    }

    tracing::debug!(
        nodes = subgraph.members.len(),
        parent_edges = subgraph.parent_edges.len(),
        spouse_edges = subgraph.spouse_edges.len(),
        "subgraph rendered"
    );
    Ok(())
}
