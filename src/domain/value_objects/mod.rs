//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod entity_kind;
mod ids;
mod sort_key;

pub use entity_kind::EntityKind;
pub use ids::{BookId, LoanId, MemberId, ReservationId};
pub use sort_key::{BookSort, LoanSort, MemberSort, ReservationSort};
