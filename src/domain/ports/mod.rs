//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod book_repository;
pub mod clock;
pub mod loan_repository;
pub mod member_repository;
pub mod reservation_repository;
pub mod store_error;
pub mod unit_of_work;

pub use book_repository::BookRepository;
pub use clock::Clock;
pub use loan_repository::LoanRepository;
pub use member_repository::MemberRepository;
pub use reservation_repository::ReservationRepository;
pub use store_error::{StoreError, StoreResult};
pub use unit_of_work::{Transaction, TransactionManager, UnitOfWork};
