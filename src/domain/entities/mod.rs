//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Book` - A catalogued book
//! - `Member` - A registered borrower with a loan limit
//! - `Loan` - A member holding a book, active until returned
//! - `Reservation` - A member queued for a book that is out

mod book;
mod loan;
mod member;
mod reservation;

pub use book::{Book, NewBook};
pub use loan::{Loan, NewLoan};
pub use member::{Member, NewMember};
pub use reservation::{NewReservation, Reservation};
