//! Relationship edge — a directed, typed kinship fact between two members.

use serde::{Deserialize, Serialize};
use super::MemberId;

/// Opaque edge identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of kinship relation kinds.
///
/// `Parent` and `Spouse` are the only kinds the tree builder interprets
/// structurally; every other kind is either a stored fact passed through
/// unchanged or derivable from parent/child edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    Parent,
    Child,
    Spouse,
    Sibling,
    Uncle,
    Aunt,
    Bua,
    Fufaji,
    Cousin,
    Grandparent,
    Grandchild,
    Nephew,
    Niece,
}

impl RelationKind {
    /// The semantic inverse of this kind, used to keep the edge set
    /// symmetric whenever a new fact is recorded.
    ///
    /// Known asymmetry: both `Uncle` and `Bua` reverse to `Nephew`, and both
    /// `Aunt` and `Fufaji` reverse to `Niece`, so `reverse(reverse(Bua))` is
    /// `Uncle`, not `Bua`. The table is implemented as given rather than
    /// distinguishing the reverse by the subject's gender.
    pub fn reverse(self) -> RelationKind {
        use RelationKind::*;
        match self {
            Parent => Child,
            Child => Parent,
            Spouse => Spouse,
            Sibling => Sibling,
            Uncle => Nephew,
            Aunt => Niece,
            Bua => Nephew,
            Fufaji => Niece,
            Cousin => Cousin,
            Grandparent => Grandchild,
            Grandchild => Grandparent,
            Nephew => Uncle,
            Niece => Aunt,
        }
    }

    /// Lowercase wire name, also used as the edge label when rendering.
    pub fn as_str(self) -> &'static str {
        use RelationKind::*;
        match self {
            Parent => "parent",
            Child => "child",
            Spouse => "spouse",
            Sibling => "sibling",
            Uncle => "uncle",
            Aunt => "aunt",
            Bua => "bua",
            Fufaji => "fufaji",
            Cousin => "cousin",
            Grandparent => "grandparent",
            Grandchild => "grandchild",
            Nephew => "nephew",
            Niece => "niece",
        }
    }

    /// All kinds, in declaration order.
    pub const ALL: [RelationKind; 13] = [
        RelationKind::Parent,
        RelationKind::Child,
        RelationKind::Spouse,
        RelationKind::Sibling,
        RelationKind::Uncle,
        RelationKind::Aunt,
        RelationKind::Bua,
        RelationKind::Fufaji,
        RelationKind::Cousin,
        RelationKind::Grandparent,
        RelationKind::Grandchild,
        RelationKind::Nephew,
        RelationKind::Niece,
    ];
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, typed relationship fact `(from, to, kind)`.
///
/// For every stored edge there eventually exists a reciprocal edge of kind
/// `kind.reverse()` from `to` back to `from`; the write path enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEdge {
    pub id: EdgeId,
    pub from: MemberId,
    pub to: MemberId,
    pub kind: RelationKind,
}

impl RelationEdge {
    pub fn new(id: EdgeId, from: MemberId, to: MemberId, kind: RelationKind) -> Self {
        Self { id, from, to, kind }
    }

    /// The `(from, to, kind)` triple the store enforces uniqueness on.
    pub fn key(&self) -> (MemberId, MemberId, RelationKind) {
        (self.from, self.to, self.kind)
    }
}
