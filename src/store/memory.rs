//! In-memory relationship store.
//!
//! This is the reference implementation of `RelationshipStore`.
//! It uses simple hash maps protected by RwLock.
//!
//! ## Limitations
//!
//! - **No persistence**: the fact base lives and dies with the process.
//! - **Per-collection locks**: multi-step mutations are NOT atomic across
//!   collections. Safe for single-writer or read-heavy use only.
//!
//! Use this store for:
//! - Testing the tree builder, deriver, selector, and render adapter
//! - Embedding kintree in applications that don't need persistence

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use hashbrown::{HashMap, HashSet};
use parking_lot::RwLock;

use crate::model::{EdgeId, Member, MemberId, RelationEdge, RelationKind};
use crate::store::RelationshipStore;
use crate::{Error, Result};

/// In-memory fact base.
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

struct MemoryInner {
    members: RwLock<HashMap<MemberId, Member>>,
    /// Insertion-ordered edge list; iteration order is the recording order.
    edges: RwLock<Vec<RelationEdge>>,
    /// Uniqueness guard on the (from, to, kind) triple.
    edge_keys: RwLock<HashSet<(MemberId, MemberId, RelationKind)>>,
    next_edge_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MemoryInner {
                members: RwLock::new(HashMap::new()),
                edges: RwLock::new(Vec::new()),
                edge_keys: RwLock::new(HashSet::new()),
                next_edge_id: AtomicU64::new(1),
            }),
        }
    }

    /// Insert or replace a member. Member identity is owned by the caller;
    /// the store never mints member ids.
    pub fn insert_member(&self, member: Member) {
        self.inner.members.write().insert(member.id, member);
    }

    pub fn member_count(&self) -> usize {
        self.inner.members.read().len()
    }

    pub fn relationship_count(&self) -> usize {
        self.inner.edges.read().len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelationshipStore for MemoryStore {
    async fn all_members(&self) -> Result<Vec<Member>> {
        let mut members: Vec<Member> = self.inner.members.read().values().cloned().collect();
        members.sort_by_key(|m| m.id);
        Ok(members)
    }

    async fn all_relationships(&self) -> Result<Vec<RelationEdge>> {
        Ok(self.inner.edges.read().clone())
    }

    async fn member(&self, id: MemberId) -> Result<Option<Member>> {
        Ok(self.inner.members.read().get(&id).cloned())
    }

    async fn create_relationship(
        &self,
        from: MemberId,
        to: MemberId,
        kind: RelationKind,
    ) -> Result<RelationEdge> {
        if from == to {
            return Err(Error::MalformedEdge(format!(
                "self-referential edge {from} -[{kind}]-> {to}"
            )));
        }

        // Both endpoints must name known members.
        {
            let members = self.inner.members.read();
            if !members.contains_key(&from) {
                return Err(Error::MalformedEdge(format!("unknown member {from}")));
            }
            if !members.contains_key(&to) {
                return Err(Error::MalformedEdge(format!("unknown member {to}")));
            }
        }

        let mut keys = self.inner.edge_keys.write();
        if !keys.insert((from, to, kind)) {
            return Err(Error::DuplicateEdge { from, to, kind });
        }

        let id = EdgeId(self.inner.next_edge_id.fetch_add(1, Ordering::Relaxed));
        let edge = RelationEdge::new(id, from, to, kind);
        self.inner.edges.write().push(edge.clone());

        tracing::debug!(%from, %to, kind = %kind, "relationship stored");
        Ok(edge)
    }
}
