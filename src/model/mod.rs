//! # Family Graph Model
//!
//! Clean DTOs that define the family graph.
//! These types cross every boundary: store ↔ tree builder ↔ deriver ↔ render.
//!
//! Design rule: this module is pure data — no I/O, no state, no async.

pub mod member;
pub mod edge;
pub mod summary;

pub use member::{Gender, Member, MemberId};
pub use edge::{EdgeId, RelationEdge, RelationKind};
pub use summary::FamilySummary;
