//! Transaction boundary
//!
//! Wraps one command's business logic in exactly one transaction: begin
//! before, commit on success, roll back on any error. A commit failure is
//! reported like any other failure and leaves the committed state untouched.

use crate::domain::ports::{Transaction, TransactionManager, UnitOfWork};
use crate::error::BiblioResult;

pub struct TransactionBoundary<'m, M: TransactionManager> {
    manager: &'m mut M,
}

impl<'m, M: TransactionManager> TransactionBoundary<'m, M> {
    pub fn new(manager: &'m mut M) -> Self {
        Self { manager }
    }

    /// Run `work` and commit its changes if it succeeds
    pub fn run<T>(
        &mut self,
        work: impl FnOnce(&mut dyn UnitOfWork) -> BiblioResult<T>,
    ) -> BiblioResult<T> {
        let mut tx = self.manager.begin()?;
        match work(&mut tx) {
            Ok(value) => {
                tx.commit()?;
                tracing::debug!("committed");
                Ok(value)
            }
            Err(err) => {
                tx.rollback();
                if err.is_storage() {
                    tracing::warn!(error = %err, "rolled back after storage failure");
                } else {
                    tracing::debug!(error = %err, "rolled back");
                }
                Err(err)
            }
        }
    }

    /// Run `work` and always roll back; for queries
    pub fn read<T>(
        &mut self,
        work: impl FnOnce(&mut dyn UnitOfWork) -> BiblioResult<T>,
    ) -> BiblioResult<T> {
        let mut tx = self.manager.begin()?;
        let result = work(&mut tx);
        tx.rollback();
        result
    }
}
