//! Repository Implementations
//!
//! The persistence ports implemented over the in-memory tables of a
//! transaction's working copy.

mod book;
mod loan;
mod member;
mod reservation;
