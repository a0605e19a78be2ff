//! # kintree — Family Relationship Graph Engine
//!
//! Models a family as a graph of members connected by typed kinship edges
//! and derives presentable views from it: per-member family summaries,
//! depth-bounded subtrees, and full-tree renderings.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `RelationshipStore` is the contract between the
//!    engine and whatever holds the fact base
//! 2. **Clean DTOs**: `Member`, `RelationEdge`, `FamilySummary`, `Subgraph`
//!    cross all boundaries
//! 3. **Build fresh, traverse pure**: every query rebuilds its own
//!    `FamilyTree` from one bulk fetch; the traversal algorithms are pure
//!    functions over it
//! 4. **Symmetry at write time**: recording a fact synchronously ensures
//!    its reverse edge exists, so reads never have to repair the edge set
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use kintree::{FamilyGraph, Gender, Member, MemberId, RelationKind};
//!
//! # async fn example() -> kintree::Result<()> {
//! let graph = FamilyGraph::open_memory();
//!
//! let dob = NaiveDate::from_ymd_opt(1960, 4, 2).unwrap();
//! graph.store().insert_member(Member::new(MemberId(1), "Asha", "Verma", dob, Gender::Female));
//! graph.store().insert_member(Member::new(MemberId(2), "Ravi", "Verma", dob, Gender::Male));
//!
//! // The reverse edge (2 -[child]-> 1) is created automatically.
//! graph.record(MemberId(1), MemberId(2), RelationKind::Parent).await?;
//!
//! let summary = graph.summary(MemberId(1)).await?;
//! println!("children: {}", summary.children.len());
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod store;
pub mod tree;
pub mod derive;
pub mod select;
pub mod render;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    EdgeId, FamilySummary, Gender, Member, MemberId, RelationEdge, RelationKind,
};

// ============================================================================
// Re-exports: Store
// ============================================================================

pub use store::{MemoryStore, RelationshipStore};

// ============================================================================
// Re-exports: Engine
// ============================================================================

pub use tree::FamilyTree;
pub use select::Subgraph;
pub use render::{DotRenderer, EdgeStyle, RenderSink};

// ============================================================================
// Top-level FamilyGraph handle
// ============================================================================

/// The primary entry point. A `FamilyGraph` wraps a relationship store and
/// provides the query surface.
///
/// Every query independently re-fetches the full member/edge lists and
/// builds its own `FamilyTree` — O(edges) work per query, no shared graph
/// state between concurrent queries, no cache to invalidate. The fact base
/// is assumed to fit comfortably in memory.
pub struct FamilyGraph<S: RelationshipStore> {
    store: S,
}

impl<S: RelationshipStore> FamilyGraph<S> {
    /// Create a FamilyGraph over the given store.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store (for member management and advanced use).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a relationship fact and ensure its reverse exists.
    ///
    /// The reverse edge `(to, from, kind.reverse())` is created by an
    /// explicit post-write hook, synchronously, on creation only.
    /// Idempotent: re-recording an existing fact (or racing an existing
    /// reverse) is absorbed as a no-op, never surfaced as an error.
    pub async fn record(
        &self,
        from: MemberId,
        to: MemberId,
        kind: RelationKind,
    ) -> Result<()> {
        match self.store.create_relationship(from, to, kind).await {
            Ok(edge) => {
                tracing::info!(%from, %to, kind = %kind, edge = %edge.id, "relationship recorded");
            }
            Err(Error::DuplicateEdge { .. }) => {
                tracing::debug!(%from, %to, kind = %kind, "relationship already recorded");
            }
            Err(e) => return Err(e),
        }

        let reverse = kind.reverse();
        match self.store.create_relationship(to, from, reverse).await {
            Ok(_) => Ok(()),
            Err(Error::DuplicateEdge { .. }) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Fetch the full fact base and build a fresh tree.
    pub async fn build(&self) -> Result<FamilyTree> {
        let members = self.store.all_members().await?;
        let edges = self.store.all_relationships().await?;
        Ok(FamilyTree::build(&members, &edges))
    }

    /// One member's family summary: spouse, children, siblings, parents.
    pub async fn summary(&self, member_id: MemberId) -> Result<FamilySummary> {
        let tree = self.build().await?;
        derive::summarize(&tree, member_id)
    }

    /// Siblings of the member's first spouse.
    pub async fn spouse_siblings(&self, member_id: MemberId) -> Result<Vec<Member>> {
        let tree = self.build().await?;
        derive::spouse_siblings(&tree, member_id)
    }

    /// The member's relevant circle — subject, spouse, children, siblings,
    /// parents, and the spouse's siblings — as a renderable subgraph.
    pub async fn family_circle(&self, member_id: MemberId) -> Result<Subgraph> {
        let tree = self.build().await?;
        let summary = derive::summarize(&tree, member_id)?;
        let in_laws = derive::spouse_siblings(&tree, member_id)?;

        let mut ids = vec![summary.member.id];
        ids.extend(summary.spouse.iter().map(|m| m.id));
        ids.extend(summary.children.iter().map(|m| m.id));
        ids.extend(summary.siblings.iter().map(|m| m.id));
        ids.extend(summary.parents.iter().map(|m| m.id));
        ids.extend(in_laws.iter().map(|m| m.id));

        // Order-preserving dedup; the sibling lists can repeat members.
        let mut seen = hashbrown::HashSet::new();
        ids.retain(|id| seen.insert(*id));

        Ok(select::select_by_ids(&tree, &ids))
    }

    /// The subtree within `max_depth` parent/child hops of `root`.
    /// Spouse hops are free.
    pub async fn subtree(&self, root: MemberId, max_depth: usize) -> Result<Subgraph> {
        let tree = self.build().await?;
        let ids = select::select_by_depth(&tree, root, max_depth)?;
        Ok(select::select_by_ids(&tree, &ids))
    }

    /// The whole family graph as a renderable subgraph.
    pub async fn full_tree(&self) -> Result<Subgraph> {
        let tree = self.build().await?;
        let ids: Vec<MemberId> = tree.members().map(|m| m.id).collect();
        Ok(select::select_by_ids(&tree, &ids))
    }

    /// The linear member listing, ordered by id.
    pub async fn members(&self) -> Result<Vec<Member>> {
        self.store.all_members().await
    }
}

/// In-memory graph for testing and embedding.
impl FamilyGraph<MemoryStore> {
    pub fn open_memory() -> Self {
        Self::with_store(MemoryStore::new())
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate edge: {from} -[{kind}]-> {to}")]
    DuplicateEdge {
        from: MemberId,
        to: MemberId,
        kind: RelationKind,
    },

    #[error("Malformed edge: {0}")]
    MalformedEdge(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
