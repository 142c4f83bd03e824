//! Loan service
//!
//! A book is either on the shelf (no active loan) or out (exactly one active
//! loan). Lending, renewing and returning move it between those two states.
//! Every check reads through the unit-of-work before anything is written, so
//! a failed precondition leaves nothing behind to roll back but the reads.

use std::sync::Arc;

use crate::domain::entities::{Book, Loan, Member, NewLoan};
use crate::domain::ports::{Clock, UnitOfWork};
use crate::domain::value_objects::{BookId, LoanId, MemberId};
use crate::error::{BiblioError, BiblioResult};

use super::lookup::{require_book, require_loan, require_member};

pub struct LoanService {
    clock: Arc<dyn Clock>,
}

impl LoanService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Lend `book` to `member`
    pub fn begin_loan(
        &self,
        uow: &mut dyn UnitOfWork,
        member_id: MemberId,
        book_id: BookId,
    ) -> BiblioResult<Loan> {
        let member = require_member(uow, member_id)?;
        let book = require_book(uow, book_id)?;

        ensure_on_shelf(uow, &book)?;
        ensure_below_limit(uow, &member)?;

        if let Some(head) = uow.reservations().queue_head(book.id)? {
            return Err(BiblioError::ReservationConflict(format!(
                "book {} is reserved by member {}",
                book.id, head.member_id
            )));
        }

        let loan = uow.loans().add(NewLoan {
            member_id: member.id,
            book_id: book.id,
            loan_date: self.clock.now(),
        })?;
        tracing::debug!(loan = %loan.id, member = %member.id, book = %book.id, "loan started");
        Ok(loan)
    }

    /// Restart the loan period of an active loan
    pub fn renew_loan(&self, uow: &mut dyn UnitOfWork, loan_id: LoanId) -> BiblioResult<Loan> {
        let mut loan = require_loan(uow, loan_id)?;
        if !loan.is_active() {
            return Err(BiblioError::LoanConflict(format!(
                "loan {} was already returned",
                loan.id
            )));
        }

        match uow.loans().current_loan(loan.book_id)? {
            Some(current) if current.id == loan.id && current.member_id == loan.member_id => {}
            Some(current) => {
                return Err(BiblioError::LoanConflict(format!(
                    "book {} is lent to member {} under loan {}",
                    loan.book_id, current.member_id, current.id
                )));
            }
            None => {
                return Err(BiblioError::LoanConflict(format!(
                    "book {} is not lent",
                    loan.book_id
                )));
            }
        }

        if let Some(head) = uow.reservations().queue_head(loan.book_id)? {
            return Err(BiblioError::ReservationConflict(format!(
                "book {} is reserved by member {}; loan {} cannot be renewed",
                loan.book_id, head.member_id, loan.id
            )));
        }

        loan.renew(self.clock.now());
        uow.loans().update(&loan)?;
        tracing::debug!(loan = %loan.id, "loan renewed");
        Ok(loan)
    }

    /// Return the book held under `loan_id`
    pub fn end_loan(&self, uow: &mut dyn UnitOfWork, loan_id: LoanId) -> BiblioResult<Loan> {
        let mut loan = require_loan(uow, loan_id)?;
        if !loan.is_active() {
            return Err(BiblioError::LoanConflict(format!(
                "loan {} was already returned",
                loan.id
            )));
        }

        loan.close(self.clock.now());
        uow.loans().update(&loan)?;
        tracing::debug!(loan = %loan.id, book = %loan.book_id, "loan ended");
        Ok(loan)
    }
}

/// The book must not be out
pub(crate) fn ensure_on_shelf(uow: &mut dyn UnitOfWork, book: &Book) -> BiblioResult<()> {
    match uow.loans().current_loan(book.id)? {
        Some(current) => Err(BiblioError::LoanConflict(format!(
            "book {} is already lent to member {}",
            book.id, current.member_id
        ))),
        None => Ok(()),
    }
}

/// The member must have room for one more loan
pub(crate) fn ensure_below_limit(uow: &mut dyn UnitOfWork, member: &Member) -> BiblioResult<()> {
    let active = uow.loans().find_active_by_member(member.id)?.len();
    if member.can_borrow(active) {
        Ok(())
    } else {
        Err(BiblioError::LoanLimitExceeded {
            member: member.id,
            limit: member.loan_limit,
        })
    }
}
