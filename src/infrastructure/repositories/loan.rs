//! LoanRepository over the in-memory loan table

use crate::domain::entities::{Loan, NewLoan};
use crate::domain::ports::{LoanRepository, StoreError, StoreResult};
use crate::domain::value_objects::{BookId, EntityKind, LoanId, LoanSort, MemberId};
use crate::infrastructure::store::{next_id, LoanTable};

impl LoanTable {
    fn select(&self, keep: impl Fn(&Loan) -> bool, sort: LoanSort) -> Vec<Loan> {
        let mut loans: Vec<Loan> = self.rows.values().filter(|l| keep(l)).cloned().collect();
        if sort == LoanSort::LoanDate {
            loans.sort_by(|a, b| a.loan_date.cmp(&b.loan_date).then(a.id.cmp(&b.id)));
        }
        loans
    }
}

impl LoanRepository for LoanTable {
    fn get(&self, id: LoanId) -> StoreResult<Option<Loan>> {
        Ok(self.rows.get(&id).cloned())
    }

    fn add(&mut self, loan: NewLoan) -> StoreResult<Loan> {
        let id = LoanId::new(next_id(&mut self.last_id));
        let loan = loan.into_loan(id);
        self.rows.insert(id, loan.clone());
        Ok(loan)
    }

    fn update(&mut self, loan: &Loan) -> StoreResult<()> {
        match self.rows.get_mut(&loan.id) {
            Some(row) => {
                *row = loan.clone();
                Ok(())
            }
            None => Err(StoreError::NoRowAffected {
                kind: EntityKind::Loan,
                id: loan.id.get(),
            }),
        }
    }

    fn delete(&mut self, id: LoanId) -> StoreResult<()> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NoRowAffected {
                kind: EntityKind::Loan,
                id: id.get(),
            })
    }

    fn find_by_book(&self, book: BookId, sort: LoanSort) -> StoreResult<Vec<Loan>> {
        Ok(self.select(|l| l.book_id == book, sort))
    }

    fn find_by_member(&self, member: MemberId, sort: LoanSort) -> StoreResult<Vec<Loan>> {
        Ok(self.select(|l| l.member_id == member, sort))
    }

    fn get_all(&self, sort: LoanSort) -> StoreResult<Vec<Loan>> {
        Ok(self.select(|_| true, sort))
    }
}
