//! Family summary — the derived view of one member's immediate relations.

use serde::{Deserialize, Serialize};
use super::Member;

/// One member's immediate family, assembled per query from a built tree.
///
/// Only the first recorded spouse is ever surfaced, even when several are
/// stored. Siblings are collected per shared parent without deduplication,
/// so a full sibling (both parents shared) appears twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilySummary {
    pub member: Member,
    pub spouse: Option<Member>,
    pub children: Vec<Member>,
    pub siblings: Vec<Member>,
    pub parents: Vec<Member>,
}

impl FamilySummary {
    /// True when the member has no recorded immediate relations at all.
    pub fn is_isolated(&self) -> bool {
        self.spouse.is_none()
            && self.children.is_empty()
            && self.siblings.is_empty()
            && self.parents.is_empty()
    }
}
