//! Domain Layer
//!
//! The circulation rules, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Book, Member, Loan, Reservation
//! - `value_objects/` - Identities, sort keys, entity kinds
//! - `services/` - Lending, reservation, membership and catalogue rules
//! - `ports/` - Repository, unit-of-work, transaction and clock traits
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - All storage goes through trait-defined ports
//! 3. **One transaction per command** - Services receive an open
//!    unit-of-work and never commit it themselves

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
