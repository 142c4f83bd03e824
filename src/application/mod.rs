//! Application Layer
//!
//! Coordinates the domain services with the store. Holds no business rules
//! of its own; its only job is to give every command exactly one transaction.

pub mod services;
pub mod transaction;

pub use services::Services;
pub use transaction::TransactionBoundary;
