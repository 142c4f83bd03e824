//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `store/` - Tables, transactions and the backends that persist them
//! - `repositories/` - The entity ports implemented over the tables
//! - `clock` - System and deterministic clocks

pub mod clock;
pub mod repositories;
pub mod store;

pub use clock::{SteppingClock, SystemClock};
pub use store::{MemoryBackend, StorageBackend, Store, StoreTransaction, Tables, TomlBackend};
