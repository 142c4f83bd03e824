//! UnitOfWork and transaction ports
//!
//! A unit-of-work hands out the four repositories bound to one open
//! transaction. Services only ever see `&mut dyn UnitOfWork`; opening,
//! committing and rolling back belong to the transaction manager.

use super::{
    BookRepository, LoanRepository, MemberRepository, ReservationRepository, StoreResult,
};

pub trait UnitOfWork {
    fn books(&mut self) -> &mut dyn BookRepository;
    fn members(&mut self) -> &mut dyn MemberRepository;
    fn loans(&mut self) -> &mut dyn LoanRepository;
    fn reservations(&mut self) -> &mut dyn ReservationRepository;
}

/// An open transaction. Dropping it without `commit` rolls it back.
pub trait Transaction: UnitOfWork {
    /// Durably apply every mutation made since `begin`
    fn commit(self) -> StoreResult<()>;

    /// Discard every mutation made since `begin`
    fn rollback(self);
}

/// Opens transactions. The open transaction borrows the manager mutably, so
/// a second `begin` while one is open does not compile.
pub trait TransactionManager {
    type Tx<'a>: Transaction
    where
        Self: 'a;

    fn begin(&mut self) -> StoreResult<Self::Tx<'_>>;
}
