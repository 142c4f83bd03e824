//! Biblio - library circulation engine
//!
//! Members borrow books, renew and return loans, and queue for books that
//! are out. Every command runs in one transaction against a store that is
//! either in memory or a single TOML file.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Services, TransactionBoundary};
pub use config::Config;
pub use error::{BiblioError, BiblioResult};
pub use infrastructure::{SteppingClock, Store, SystemClock, TomlBackend};
pub use presentation::{Dispatcher, Outcome, Report, Session};
