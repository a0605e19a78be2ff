//! # Tree Builder
//!
//! Consumes the full edge list and produces an in-memory graph suitable for
//! repeated traversal without re-querying the store: one arena slot per
//! member, with resolved parent/child/spouse references.
//!
//! Cross-references between nodes are slot indices into the arena, never
//! object pointers, so the tree is singly owned and drops cleanly even when
//! the underlying relationship graph contains cycles (cousin marriages
//! create loops through shared ancestors).
//!
//! The tree is rebuilt fresh for every query — see `FamilyGraph`.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::{Member, MemberId, RelationEdge, RelationKind};

/// A member's resolved position in the built tree.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub member: Member,
    parents: SmallVec<[usize; 2]>,
    children: SmallVec<[usize; 4]>,
    spouses: SmallVec<[usize; 1]>,
}

impl TreeNode {
    fn new(member: Member) -> Self {
        Self {
            member,
            parents: SmallVec::new(),
            children: SmallVec::new(),
            spouses: SmallVec::new(),
        }
    }

    pub(crate) fn parent_slots(&self) -> &[usize] {
        &self.parents
    }

    pub(crate) fn child_slots(&self) -> &[usize] {
        &self.children
    }

    pub(crate) fn spouse_slots(&self) -> &[usize] {
        &self.spouses
    }
}

/// The built family graph: an arena of nodes plus an id → slot index.
///
/// Structural content is a pure function of the input edge set; edge
/// iteration order only decides the insertion order of the per-node lists.
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    nodes: Vec<TreeNode>,
    index: HashMap<MemberId, usize>,
}

impl FamilyTree {
    /// Build a tree from the full member and edge lists.
    ///
    /// Every supplied member gets exactly one node, so members with no
    /// edges appear as isolated nodes. Only `parent` and `spouse` edges
    /// shape the node lists; every other kind is structurally ignored.
    /// Edges naming a member absent from `members` are skipped.
    pub fn build(members: &[Member], edges: &[RelationEdge]) -> FamilyTree {
        let mut tree = FamilyTree {
            nodes: Vec::with_capacity(members.len()),
            index: HashMap::with_capacity(members.len()),
        };

        for member in members {
            if tree.index.contains_key(&member.id) {
                continue;
            }
            tree.index.insert(member.id, tree.nodes.len());
            tree.nodes.push(TreeNode::new(member.clone()));
        }

        for edge in edges {
            let (Some(&from), Some(&to)) =
                (tree.index.get(&edge.from), tree.index.get(&edge.to))
            else {
                tracing::debug!(from = %edge.from, to = %edge.to, "edge endpoint not in member set, skipped");
                continue;
            };

            match edge.kind {
                // (A, B, parent): A is parent of B.
                RelationKind::Parent => {
                    push_unique(&mut tree.nodes[to].parents, from);
                    push_unique(&mut tree.nodes[from].children, to);
                }
                RelationKind::Spouse => {
                    push_unique(&mut tree.nodes[from].spouses, to);
                    push_unique(&mut tree.nodes[to].spouses, from);
                }
                _ => {}
            }
        }

        tracing::debug!(
            nodes = tree.nodes.len(),
            edges = edges.len(),
            "family tree built"
        );
        tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: MemberId) -> Option<&TreeNode> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    /// All nodes in arena order (member insertion order).
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.nodes.iter().map(|n| &n.member)
    }

    pub fn parents_of(&self, id: MemberId) -> Option<Vec<&Member>> {
        self.get(id)
            .map(|n| n.parents.iter().map(|&s| &self.nodes[s].member).collect())
    }

    pub fn children_of(&self, id: MemberId) -> Option<Vec<&Member>> {
        self.get(id)
            .map(|n| n.children.iter().map(|&s| &self.nodes[s].member).collect())
    }

    pub fn spouses_of(&self, id: MemberId) -> Option<Vec<&Member>> {
        self.get(id)
            .map(|n| n.spouses.iter().map(|&s| &self.nodes[s].member).collect())
    }

    pub(crate) fn slot(&self, id: MemberId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub(crate) fn node_at(&self, slot: usize) -> &TreeNode {
        &self.nodes[slot]
    }
}

fn push_unique<A: smallvec::Array<Item = usize>>(list: &mut SmallVec<A>, slot: usize) {
    if !list.contains(&slot) {
        list.push(slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use crate::model::{EdgeId, Gender};

    fn member(id: u64) -> Member {
        Member::new(
            MemberId(id),
            format!("M{id}"),
            "Verma",
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            Gender::Other,
        )
    }

    fn edge(id: u64, from: u64, to: u64, kind: RelationKind) -> RelationEdge {
        RelationEdge::new(EdgeId(id), MemberId(from), MemberId(to), kind)
    }

    #[test]
    fn parent_edge_links_both_directions() {
        let members = [member(1), member(2)];
        let edges = [edge(1, 1, 2, RelationKind::Parent)];
        let tree = FamilyTree::build(&members, &edges);

        let parents: Vec<MemberId> = tree
            .parents_of(MemberId(2))
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        let children: Vec<MemberId> = tree
            .children_of(MemberId(1))
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();

        assert_eq!(parents, vec![MemberId(1)]);
        assert_eq!(children, vec![MemberId(2)]);
    }

    #[test]
    fn spouse_edge_is_symmetric_and_deduped() {
        let members = [member(1), member(2)];
        // Same spouse fact three times over: forward, reverse, forward again.
        let edges = [
            edge(1, 1, 2, RelationKind::Spouse),
            edge(2, 2, 1, RelationKind::Spouse),
            edge(3, 1, 2, RelationKind::Spouse),
        ];
        let tree = FamilyTree::build(&members, &edges);

        assert_eq!(tree.spouses_of(MemberId(1)).unwrap().len(), 1);
        assert_eq!(tree.spouses_of(MemberId(2)).unwrap().len(), 1);
    }

    #[test]
    fn duplicate_parent_edges_do_not_double_link() {
        let members = [member(1), member(2)];
        let edges = [
            edge(1, 1, 2, RelationKind::Parent),
            edge(2, 1, 2, RelationKind::Parent),
        ];
        let tree = FamilyTree::build(&members, &edges);

        assert_eq!(tree.parents_of(MemberId(2)).unwrap().len(), 1);
        assert_eq!(tree.children_of(MemberId(1)).unwrap().len(), 1);
    }

    #[test]
    fn non_structural_kinds_are_ignored() {
        let members = [member(1), member(2)];
        let edges = [
            edge(1, 1, 2, RelationKind::Uncle),
            edge(2, 2, 1, RelationKind::Nephew),
            edge(3, 1, 2, RelationKind::Cousin),
        ];
        let tree = FamilyTree::build(&members, &edges);

        let node = tree.get(MemberId(1)).unwrap();
        assert!(node.parent_slots().is_empty());
        assert!(node.child_slots().is_empty());
        assert!(node.spouse_slots().is_empty());
    }

    #[test]
    fn members_without_edges_get_isolated_nodes() {
        let members = [member(1), member(2), member(3)];
        let edges = [edge(1, 1, 2, RelationKind::Parent)];
        let tree = FamilyTree::build(&members, &edges);

        assert_eq!(tree.len(), 3);
        assert!(tree.contains(MemberId(3)));
        assert!(tree.get(MemberId(3)).unwrap().parent_slots().is_empty());
    }

    #[test]
    fn edges_with_unknown_endpoints_are_skipped() {
        let members = [member(1)];
        let edges = [edge(1, 1, 9, RelationKind::Parent)];
        let tree = FamilyTree::build(&members, &edges);

        assert_eq!(tree.len(), 1);
        assert!(tree.get(MemberId(1)).unwrap().child_slots().is_empty());
    }

    #[test]
    fn edge_order_does_not_change_structure() {
        let members = [member(1), member(2), member(3)];
        let forward = [
            edge(1, 1, 3, RelationKind::Parent),
            edge(2, 2, 3, RelationKind::Parent),
            edge(3, 1, 2, RelationKind::Spouse),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = FamilyTree::build(&members, &forward);
        let b = FamilyTree::build(&members, &reversed);

        for id in [1, 2, 3].map(MemberId) {
            let mut pa: Vec<MemberId> =
                a.parents_of(id).unwrap().iter().map(|m| m.id).collect();
            let mut pb: Vec<MemberId> =
                b.parents_of(id).unwrap().iter().map(|m| m.id).collect();
            pa.sort();
            pb.sort();
            assert_eq!(pa, pb);
        }
    }
}
