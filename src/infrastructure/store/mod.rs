//! Store and transaction boundary
//!
//! `Store` keeps the committed tables and a backend that makes them durable.
//! `Store::begin` opens a `StoreTransaction` over a private working copy:
//!
//! - `commit` saves the working copy through the backend and, only if that
//!   succeeds, makes it the committed state
//! - `rollback`, or dropping the transaction, throws the working copy away
//!
//! The transaction holds `&mut Store`, so at most one is open at a time.

mod memory;
mod tables;
mod toml_backend;

pub use memory::MemoryBackend;
pub use tables::{BookTable, LoanTable, MemberTable, ReservationTable, Tables};
pub use toml_backend::TomlBackend;

pub(crate) use tables::next_id;

use crate::domain::ports::{
    BookRepository, LoanRepository, MemberRepository, ReservationRepository, StoreResult,
    Transaction, TransactionManager, UnitOfWork,
};

/// Where committed snapshots go
pub trait StorageBackend {
    fn load(&self) -> StoreResult<Tables>;
    fn save(&self, tables: &Tables) -> StoreResult<()>;
    /// Short label for logs
    fn describe(&self) -> String;
}

pub struct Store {
    backend: Box<dyn StorageBackend>,
    committed: Tables,
}

impl Store {
    /// Open a store, loading whatever the backend has committed so far
    pub fn open(backend: Box<dyn StorageBackend>) -> StoreResult<Self> {
        let committed = backend.load()?;
        tracing::info!(
            backend = %backend.describe(),
            books = committed.book_count(),
            members = committed.member_count(),
            loans = committed.loan_count(),
            reservations = committed.reservation_count(),
            "store opened"
        );
        Ok(Self { backend, committed })
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryBackend::new()),
            committed: Tables::new(),
        }
    }

    /// Committed state, as the next transaction will see it
    pub fn committed(&self) -> &Tables {
        &self.committed
    }

    pub fn describe(&self) -> String {
        self.backend.describe()
    }

    pub fn begin(&mut self) -> StoreTransaction<'_> {
        let working = self.committed.clone();
        tracing::trace!("transaction begin");
        StoreTransaction {
            store: self,
            working,
            finished: false,
        }
    }
}

impl TransactionManager for Store {
    type Tx<'a> = StoreTransaction<'a>;

    fn begin(&mut self) -> StoreResult<StoreTransaction<'_>> {
        Ok(Store::begin(self))
    }
}

/// An open unit-of-work over a working copy of the tables
pub struct StoreTransaction<'a> {
    store: &'a mut Store,
    working: Tables,
    finished: bool,
}

impl StoreTransaction<'_> {
    /// The working copy, including uncommitted changes
    pub fn working(&self) -> &Tables {
        &self.working
    }
}

impl UnitOfWork for StoreTransaction<'_> {
    fn books(&mut self) -> &mut dyn BookRepository {
        &mut self.working.books
    }

    fn members(&mut self) -> &mut dyn MemberRepository {
        &mut self.working.members
    }

    fn loans(&mut self) -> &mut dyn LoanRepository {
        &mut self.working.loans
    }

    fn reservations(&mut self) -> &mut dyn ReservationRepository {
        &mut self.working.reservations
    }
}

impl Transaction for StoreTransaction<'_> {
    fn commit(mut self) -> StoreResult<()> {
        self.store.backend.save(&self.working)?;
        self.store.committed = std::mem::take(&mut self.working);
        self.finished = true;
        tracing::trace!("transaction commit");
        Ok(())
    }

    fn rollback(mut self) {
        self.finished = true;
        tracing::trace!("transaction rollback");
    }
}

impl Drop for StoreTransaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("transaction closed without commit; changes discarded");
        }
    }
}
