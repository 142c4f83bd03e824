//! Loan entity
//!
//! A loan is active while `return_date` is unset. Returned loans stay in the
//! table as history until their book or member is removed.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{BookId, LoanId, MemberId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub id: LoanId,
    pub member_id: MemberId,
    pub book_id: BookId,
    pub loan_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
}

impl Loan {
    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }

    /// Restart the loan period
    pub fn renew(&mut self, now: DateTime<Utc>) {
        self.loan_date = now;
    }

    /// Mark the book as returned
    pub fn close(&mut self, now: DateTime<Utc>) {
        self.return_date = Some(now);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoan {
    pub member_id: MemberId,
    pub book_id: BookId,
    pub loan_date: DateTime<Utc>,
}

impl NewLoan {
    pub fn into_loan(self, id: LoanId) -> Loan {
        Loan {
            id,
            member_id: self.member_id,
            book_id: self.book_id,
            loan_date: self.loan_date,
            return_date: None,
        }
    }
}
