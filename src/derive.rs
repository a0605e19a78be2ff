//! # Relationship Deriver
//!
//! Computes relations that are not directly stored — siblings, the spouse's
//! siblings — and assembles the canonical family summary for a member.
//! Pure functions over an already-built `FamilyTree`.

use crate::model::{FamilySummary, Member, MemberId};
use crate::tree::FamilyTree;
use crate::{Error, Result};

/// Assemble the family summary for one member.
///
/// Fails with `Error::NotFound` when the id has no node in the tree.
///
/// Policy: only the first recorded spouse is surfaced. Siblings are the
/// concatenation, over every parent of the subject, of that parent's
/// children (minus the subject) — deliberately without deduplication, so a
/// sibling sharing both parents is listed once per shared parent.
pub fn summarize(tree: &FamilyTree, member_id: MemberId) -> Result<FamilySummary> {
    let node = tree
        .get(member_id)
        .ok_or_else(|| Error::NotFound(format!("member {member_id}")))?;

    let spouse = node
        .spouse_slots()
        .first()
        .map(|&slot| tree.node_at(slot).member.clone());

    let children: Vec<Member> = node
        .child_slots()
        .iter()
        .map(|&slot| tree.node_at(slot).member.clone())
        .collect();

    let parents: Vec<Member> = node
        .parent_slots()
        .iter()
        .map(|&slot| tree.node_at(slot).member.clone())
        .collect();

    let siblings = siblings_of(tree, member_id);

    Ok(FamilySummary {
        member: node.member.clone(),
        spouse,
        children,
        siblings,
        parents,
    })
}

/// Siblings of the member's first spouse. Empty when the member has no
/// spouse recorded (or no node — callers that need the distinction should
/// use `summarize` first).
pub fn spouse_siblings(tree: &FamilyTree, member_id: MemberId) -> Result<Vec<Member>> {
    let node = tree
        .get(member_id)
        .ok_or_else(|| Error::NotFound(format!("member {member_id}")))?;

    let Some(&spouse_slot) = node.spouse_slots().first() else {
        return Ok(Vec::new());
    };

    Ok(siblings_of(tree, tree.node_at(spouse_slot).member.id))
}

/// Per-parent sibling collection, no dedup across shared parents.
fn siblings_of(tree: &FamilyTree, member_id: MemberId) -> Vec<Member> {
    let Some(node) = tree.get(member_id) else {
        return Vec::new();
    };

    let mut siblings = Vec::new();
    for &parent_slot in node.parent_slots() {
        for &child_slot in tree.node_at(parent_slot).child_slots() {
            let child = &tree.node_at(child_slot).member;
            if child.id != member_id {
                siblings.push(child.clone());
            }
        }
    }
    siblings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::model::{EdgeId, Gender, RelationEdge, RelationKind};

    fn member(id: u64, first: &str) -> Member {
        Member::new(
            MemberId(id),
            first,
            "Mehta",
            NaiveDate::from_ymd_opt(1980, 6, 15).unwrap(),
            Gender::Other,
        )
    }

    fn parent(id: u64, from: u64, to: u64) -> RelationEdge {
        RelationEdge::new(EdgeId(id), MemberId(from), MemberId(to), RelationKind::Parent)
    }

    #[test]
    fn full_siblings_are_listed_once_per_shared_parent() {
        // P1 and P2 are both parents of A and B.
        let members = [member(1, "P1"), member(2, "P2"), member(3, "A"), member(4, "B")];
        let edges = [
            parent(1, 1, 3),
            parent(2, 2, 3),
            parent(3, 1, 4),
            parent(4, 2, 4),
        ];
        let tree = FamilyTree::build(&members, &edges);

        let summary = summarize(&tree, MemberId(3)).unwrap();
        let sibling_ids: Vec<MemberId> = summary.siblings.iter().map(|m| m.id).collect();
        assert_eq!(sibling_ids, vec![MemberId(4), MemberId(4)]);
    }

    #[test]
    fn half_siblings_are_listed_once() {
        let members = [member(1, "P"), member(2, "A"), member(3, "B")];
        let edges = [parent(1, 1, 2), parent(2, 1, 3)];
        let tree = FamilyTree::build(&members, &edges);

        let summary = summarize(&tree, MemberId(2)).unwrap();
        let sibling_ids: Vec<MemberId> = summary.siblings.iter().map(|m| m.id).collect();
        assert_eq!(sibling_ids, vec![MemberId(3)]);
    }

    #[test]
    fn unknown_member_is_not_found() {
        let tree = FamilyTree::build(&[], &[]);
        assert!(matches!(
            summarize(&tree, MemberId(7)),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn only_first_spouse_is_surfaced() {
        let members = [member(1, "A"), member(2, "B"), member(3, "C")];
        let edges = [
            RelationEdge::new(EdgeId(1), MemberId(1), MemberId(2), RelationKind::Spouse),
            RelationEdge::new(EdgeId(2), MemberId(1), MemberId(3), RelationKind::Spouse),
        ];
        let tree = FamilyTree::build(&members, &edges);

        let summary = summarize(&tree, MemberId(1)).unwrap();
        assert_eq!(summary.spouse.as_ref().map(|m| m.id), Some(MemberId(2)));
    }

    #[test]
    fn spouse_siblings_widens_through_first_spouse() {
        // B's sibling is C (shared parent P); A is married to B.
        let members = [member(1, "A"), member(2, "B"), member(3, "C"), member(4, "P")];
        let edges = [
            RelationEdge::new(EdgeId(1), MemberId(1), MemberId(2), RelationKind::Spouse),
            parent(2, 4, 2),
            parent(3, 4, 3),
        ];
        let tree = FamilyTree::build(&members, &edges);

        let in_laws = spouse_siblings(&tree, MemberId(1)).unwrap();
        assert_eq!(in_laws.len(), 1);
        assert_eq!(in_laws[0].id, MemberId(3));

        // Unmarried member: empty, not an error.
        assert!(spouse_siblings(&tree, MemberId(3)).unwrap().is_empty());
    }
}
