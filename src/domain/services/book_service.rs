//! Book service

use crate::domain::entities::{Book, NewBook};
use crate::domain::ports::UnitOfWork;
use crate::domain::value_objects::{BookId, LoanSort};
use crate::error::{BiblioError, BiblioResult};

use super::lookup::require_book;

#[derive(Debug, Clone, Copy, Default)]
pub struct BookService;

impl BookService {
    pub fn new() -> Self {
        Self
    }

    pub fn acquire(&self, uow: &mut dyn UnitOfWork, book: NewBook) -> BiblioResult<Book> {
        if book.title.trim().is_empty() {
            return Err(BiblioError::InvalidArgument(
                "book title must not be empty".to_string(),
            ));
        }
        if book.author.trim().is_empty() {
            return Err(BiblioError::InvalidArgument(
                "book author must not be empty".to_string(),
            ));
        }

        let book = uow.books().add(book)?;
        tracing::debug!(book = %book.id, "book acquired");
        Ok(book)
    }

    /// Remove a book that is neither out nor reserved, along with its returned loans
    pub fn sell(&self, uow: &mut dyn UnitOfWork, book_id: BookId) -> BiblioResult<Book> {
        let book = require_book(uow, book_id)?;

        // a waiting member outranks the current borrower in the report
        if let Some(head) = uow.reservations().queue_head(book.id)? {
            return Err(BiblioError::ReservationConflict(format!(
                "book {} is reserved by member {}",
                book.id, head.member_id
            )));
        }

        let loans = uow.loans().find_by_book(book.id, LoanSort::LoanDate)?;
        if let Some(active) = loans.iter().find(|l| l.is_active()) {
            return Err(BiblioError::LoanConflict(format!(
                "book {} is lent to member {}",
                book.id, active.member_id
            )));
        }

        for loan in &loans {
            uow.loans().delete(loan.id)?;
        }
        uow.books().delete(book.id)?;
        tracing::debug!(book = %book.id, history = loans.len(), "book sold");
        Ok(book)
    }
}
