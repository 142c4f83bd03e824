//! LoanRepository port
//!
//! Loans are looked up by their book or their member. The `active` helpers
//! keep only loans whose return date is unset, oldest first.

use super::StoreResult;
use crate::domain::entities::{Loan, NewLoan};
use crate::domain::value_objects::{BookId, LoanId, LoanSort, MemberId};

pub trait LoanRepository {
    fn get(&self, id: LoanId) -> StoreResult<Option<Loan>>;

    /// Insert a loan; the store assigns its identity
    fn add(&mut self, loan: NewLoan) -> StoreResult<Loan>;

    fn update(&mut self, loan: &Loan) -> StoreResult<()>;

    fn delete(&mut self, id: LoanId) -> StoreResult<()>;

    fn find_by_book(&self, book: BookId, sort: LoanSort) -> StoreResult<Vec<Loan>>;

    fn find_by_member(&self, member: MemberId, sort: LoanSort) -> StoreResult<Vec<Loan>>;

    fn get_all(&self, sort: LoanSort) -> StoreResult<Vec<Loan>>;

    fn find_active_by_book(&self, book: BookId) -> StoreResult<Vec<Loan>> {
        let mut loans = self.find_by_book(book, LoanSort::LoanDate)?;
        loans.retain(Loan::is_active);
        Ok(loans)
    }

    fn find_active_by_member(&self, member: MemberId) -> StoreResult<Vec<Loan>> {
        let mut loans = self.find_by_member(member, LoanSort::LoanDate)?;
        loans.retain(Loan::is_active);
        Ok(loans)
    }

    /// The loan currently holding `book`, if it is out
    fn current_loan(&self, book: BookId) -> StoreResult<Option<Loan>> {
        Ok(self.find_active_by_book(book)?.into_iter().next())
    }
}
