//! In-memory tables
//!
//! One typed map per entity plus the counters that hand out identities.
//! A transaction works on a clone of the committed `Tables`; committing
//! swaps the clone in. Counters only grow, so an identity is never reused.

use std::collections::BTreeMap;

use crate::domain::entities::{Book, Loan, Member, Reservation};
use crate::domain::value_objects::{BookId, LoanId, MemberId, ReservationId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookTable {
    pub(crate) rows: BTreeMap<BookId, Book>,
    pub(crate) last_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberTable {
    pub(crate) rows: BTreeMap<MemberId, Member>,
    pub(crate) last_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanTable {
    pub(crate) rows: BTreeMap<LoanId, Loan>,
    pub(crate) last_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationTable {
    pub(crate) rows: BTreeMap<ReservationId, Reservation>,
    pub(crate) last_id: u64,
    pub(crate) last_sequence: u64,
}

/// Every table of the library
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    pub books: BookTable,
    pub members: MemberTable,
    pub loans: LoanTable,
    pub reservations: ReservationTable,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book_count(&self) -> usize {
        self.books.rows.len()
    }

    pub fn member_count(&self) -> usize {
        self.members.rows.len()
    }

    pub fn loan_count(&self) -> usize {
        self.loans.rows.len()
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.rows.len()
    }

    /// Rows in identity order
    pub fn book_rows(&self) -> impl Iterator<Item = &Book> {
        self.books.rows.values()
    }

    pub fn member_rows(&self) -> impl Iterator<Item = &Member> {
        self.members.rows.values()
    }

    pub fn loan_rows(&self) -> impl Iterator<Item = &Loan> {
        self.loans.rows.values()
    }

    pub fn reservation_rows(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.rows.values()
    }
}

pub(crate) fn next_id(last: &mut u64) -> u64 {
    *last += 1;
    *last
}
