//! Error types for Biblio
//!
//! Business rule violations are raised where they are detected and travel up
//! through the transaction boundary, which rolls back before the dispatcher
//! reports them.

use thiserror::Error;

use crate::domain::ports::StoreError;
use crate::domain::value_objects::{EntityKind, MemberId};

/// Result type alias for Biblio operations
pub type BiblioResult<T> = Result<T, BiblioError>;

/// Main error type for Biblio operations
#[derive(Error, Debug)]
pub enum BiblioError {
    /// A referenced member, book, loan or reservation does not exist
    #[error("{kind} {key} does not exist")]
    MissingEntity { kind: EntityKind, key: String },

    /// Book already lent, lent to someone else, or not lent when it must be
    #[error("{0}")]
    LoanConflict(String),

    /// Book already reserved, reservation not first in line, or duplicated
    #[error("{0}")]
    ReservationConflict(String),

    /// Member already holds as many loans as allowed
    #[error("member {member} has reached the loan limit ({limit})")]
    LoanLimitExceeded { member: MemberId, limit: u32 },

    /// Malformed input: bad token, unparsable number or date
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store failed underneath a business operation
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl BiblioError {
    pub fn missing(kind: EntityKind, key: impl std::fmt::Display) -> Self {
        BiblioError::MissingEntity {
            kind,
            key: key.to_string(),
        }
    }

    /// Storage failures are reported differently from rule violations
    pub fn is_storage(&self) -> bool {
        matches!(self, BiblioError::Storage(_))
    }
}
