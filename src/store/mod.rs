//! # Relationship Store Trait
//!
//! This is THE contract between kintree and whatever holds the fact base.
//! The core only needs bulk read access to members and edges, plus a single
//! write operation for recording new relationship facts.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | In-memory for testing/embedding |

pub mod memory;

use async_trait::async_trait;
use crate::model::{Member, MemberId, RelationEdge, RelationKind};
use crate::Result;

pub use memory::MemoryStore;

/// The storage contract.
///
/// All calls are treated as atomic: the core issues one bulk fetch per
/// query and one write per recorded fact, and propagates store errors
/// unchanged. No retries, no partial results.
#[async_trait]
pub trait RelationshipStore: Send + Sync + 'static {
    /// All members, in stable id order.
    async fn all_members(&self) -> Result<Vec<Member>>;

    /// All relationship edges, in insertion order.
    async fn all_relationships(&self) -> Result<Vec<RelationEdge>>;

    /// Look up a single member. Returns None if absent.
    async fn member(&self, id: MemberId) -> Result<Option<Member>>;

    /// Record a relationship fact.
    ///
    /// Fails with `Error::DuplicateEdge` when the `(from, to, kind)` triple
    /// already exists, and with `Error::MalformedEdge` when `from == to` or
    /// either endpoint names an unknown member.
    async fn create_relationship(
        &self,
        from: MemberId,
        to: MemberId,
        kind: RelationKind,
    ) -> Result<RelationEdge>;
}
