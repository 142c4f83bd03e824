//! Domain Services
//!
//! The circulation rules. Each service validates a state transition by
//! reading through the unit-of-work it is handed, then writes through the
//! same unit-of-work. None of them opens or closes a transaction.

mod book_service;
mod loan_service;
mod lookup;
mod member_service;
mod query_service;
mod reservation_service;

pub use book_service::BookService;
pub use loan_service::LoanService;
pub use member_service::MemberService;
pub use query_service::{BookStatus, MemberStatus, QueryService};
pub use reservation_service::ReservationService;
