//! Entity identities
//!
//! Each entity kind gets its own newtype so a `LoanId` can never be passed
//! where a `BookId` is expected. Identities are assigned by the store.

use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of a book in the collection
    BookId
);
entity_id!(
    /// Identity of a registered member
    MemberId
);
entity_id!(
    /// Identity of a loan (active or returned)
    LoanId
);
entity_id!(
    /// Identity of a queued reservation
    ReservationId
);
