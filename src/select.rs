//! # Subgraph Selector
//!
//! Two selection modes over a built tree: a depth-bounded traversal from a
//! root, and an explicit relevance-set filter. Both are pure functions; the
//! output `Subgraph` is the minimal node/edge subset handed to the render
//! adapter.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::model::{Member, MemberId};
use crate::tree::FamilyTree;
use crate::{Error, Result};

/// A node/edge subset extracted for rendering.
///
/// `parent_edges` are directed parent → child pairs; `spouse_edges` hold
/// each married pair exactly once. Both endpoints of every edge are
/// guaranteed to appear in `members`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subgraph {
    pub members: Vec<Member>,
    pub parent_edges: Vec<(MemberId, MemberId)>,
    pub spouse_edges: Vec<(MemberId, MemberId)>,
}

impl Subgraph {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member_ids(&self) -> Vec<MemberId> {
        self.members.iter().map(|m| m.id).collect()
    }
}

/// Collect every member reachable from `root` within `max_depth` parent or
/// child hops. Spouse hops are free: they never consume depth budget.
///
/// Traversal is depth-first — parents, then children, then spouses — and a
/// node is never revisited, so the walk terminates even when cousin
/// marriages put cycles through shared ancestors. The returned order is
/// deterministic for a given tree.
pub fn select_by_depth(
    tree: &FamilyTree,
    root: MemberId,
    max_depth: usize,
) -> Result<Vec<MemberId>> {
    let root_slot = tree
        .slot(root)
        .ok_or_else(|| Error::NotFound(format!("member {root}")))?;

    let mut visited = HashSet::with_capacity(tree.len());
    let mut out = Vec::new();
    walk(tree, root_slot, 0, max_depth, &mut visited, &mut out);
    Ok(out)
}

fn walk(
    tree: &FamilyTree,
    slot: usize,
    depth: usize,
    max_depth: usize,
    visited: &mut HashSet<usize>,
    out: &mut Vec<MemberId>,
) {
    if !visited.insert(slot) {
        return;
    }
    let node = tree.node_at(slot);
    out.push(node.member.id);

    if depth < max_depth {
        for &parent in node.parent_slots() {
            walk(tree, parent, depth + 1, max_depth, visited, out);
        }
        for &child in node.child_slots() {
            walk(tree, child, depth + 1, max_depth, visited, out);
        }
    }
    for &spouse in node.spouse_slots() {
        walk(tree, spouse, depth, max_depth, visited, out);
    }
}

/// Filter the tree down to the given ids: nodes plus the parent/spouse
/// edges whose BOTH endpoints are inside the set, nothing else.
///
/// Used when the caller has already computed a relevance set (subject,
/// spouse, children, siblings, parents, spouse's siblings) and wants exactly
/// that closure rendered.
pub fn select_by_ids(tree: &FamilyTree, ids: &[MemberId]) -> Subgraph {
    let wanted: HashSet<usize> = ids.iter().filter_map(|&id| tree.slot(id)).collect();

    let mut subgraph = Subgraph::default();
    for (slot, node) in tree.nodes().enumerate() {
        if !wanted.contains(&slot) {
            continue;
        }
        subgraph.members.push(node.member.clone());

        for &child in node.child_slots() {
            if wanted.contains(&child) {
                subgraph
                    .parent_edges
                    .push((node.member.id, tree.node_at(child).member.id));
            }
        }
        for &spouse in node.spouse_slots() {
            // Each pair once: emitted from the lower arena slot.
            if wanted.contains(&spouse) && slot < spouse {
                subgraph
                    .spouse_edges
                    .push((node.member.id, tree.node_at(spouse).member.id));
            }
        }
    }
    subgraph
}
