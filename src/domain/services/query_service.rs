//! Read-only views over the collection

use crate::domain::entities::{Book, Loan, Member, Reservation};
use crate::domain::ports::UnitOfWork;
use crate::domain::value_objects::{BookId, BookSort, LoanSort, MemberId, MemberSort, ReservationSort};
use crate::error::BiblioResult;

use super::lookup::{require_book, require_member};

/// A book with its circulation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookStatus {
    pub book: Book,
    pub loan: Option<Loan>,
    pub queue_length: usize,
}

/// A member with the number of books they hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberStatus {
    pub member: Member,
    pub active_loans: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryService;

impl QueryService {
    pub fn new() -> Self {
        Self
    }

    pub fn list_books(&self, uow: &mut dyn UnitOfWork) -> BiblioResult<Vec<BookStatus>> {
        let books = uow.books().get_all(BookSort::Id)?;
        let mut statuses = Vec::with_capacity(books.len());
        for book in books {
            let loan = uow.loans().current_loan(book.id)?;
            let queue_length = uow
                .reservations()
                .find_by_book(book.id, ReservationSort::Queue)?
                .len();
            statuses.push(BookStatus {
                book,
                loan,
                queue_length,
            });
        }
        Ok(statuses)
    }

    pub fn list_members(&self, uow: &mut dyn UnitOfWork) -> BiblioResult<Vec<MemberStatus>> {
        let members = uow.members().get_all(MemberSort::Id)?;
        let mut statuses = Vec::with_capacity(members.len());
        for member in members {
            let active_loans = uow.loans().find_active_by_member(member.id)?.len();
            statuses.push(MemberStatus {
                member,
                active_loans,
            });
        }
        Ok(statuses)
    }

    /// Every loan of a member, returned ones included, oldest first
    pub fn member_loans(
        &self,
        uow: &mut dyn UnitOfWork,
        member_id: MemberId,
    ) -> BiblioResult<Vec<Loan>> {
        let member = require_member(uow, member_id)?;
        Ok(uow.loans().find_by_member(member.id, LoanSort::LoanDate)?)
    }

    /// A book's reservations in the order they will be served
    pub fn reservation_queue(
        &self,
        uow: &mut dyn UnitOfWork,
        book_id: BookId,
    ) -> BiblioResult<Vec<Reservation>> {
        let book = require_book(uow, book_id)?;
        Ok(uow
            .reservations()
            .find_by_book(book.id, ReservationSort::Queue)?)
    }
}
