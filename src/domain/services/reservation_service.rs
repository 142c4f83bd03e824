//! Reservation service
//!
//! Only a book that is out can be reserved. Reservations of a book are served
//! strictly in queue order: `fulfill` turns the head of the queue into a loan
//! once the book is back on the shelf.

use std::sync::Arc;

use crate::domain::entities::{Loan, NewLoan, NewReservation, Reservation};
use crate::domain::ports::{Clock, UnitOfWork};
use crate::domain::value_objects::{
    BookId, EntityKind, MemberId, ReservationId, ReservationSort,
};
use crate::error::{BiblioError, BiblioResult};

use super::loan_service::{ensure_below_limit, ensure_on_shelf};
use super::lookup::{require_book, require_member, require_reservation};

pub struct ReservationService {
    clock: Arc<dyn Clock>,
}

impl ReservationService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Queue `member` for `book`
    pub fn place(
        &self,
        uow: &mut dyn UnitOfWork,
        member_id: MemberId,
        book_id: BookId,
    ) -> BiblioResult<Reservation> {
        let member = require_member(uow, member_id)?;
        let book = require_book(uow, book_id)?;

        let loan = uow
            .loans()
            .current_loan(book.id)?
            .ok_or_else(|| BiblioError::missing(EntityKind::Loan, format!("for book {}", book.id)))?;
        if loan.member_id == member.id {
            return Err(BiblioError::LoanConflict(format!(
                "member {} already has book {}",
                member.id, book.id
            )));
        }

        let already_queued = uow
            .reservations()
            .find_by_member(member.id, ReservationSort::Queue)?
            .into_iter()
            .find(|r| r.book_id == book.id);
        if let Some(existing) = already_queued {
            return Err(BiblioError::ReservationConflict(format!(
                "member {} already reserved book {} (reservation {})",
                member.id, book.id, existing.id
            )));
        }

        let reservation = uow.reservations().add(NewReservation {
            member_id: member.id,
            book_id: book.id,
            reservation_date: self.clock.now(),
        })?;
        tracing::debug!(
            reservation = %reservation.id,
            sequence = reservation.sequence,
            member = %member.id,
            book = %book.id,
            "reservation placed"
        );
        Ok(reservation)
    }

    /// Convert the head of a book's queue into a loan
    pub fn fulfill(
        &self,
        uow: &mut dyn UnitOfWork,
        reservation_id: ReservationId,
    ) -> BiblioResult<Loan> {
        let reservation = require_reservation(uow, reservation_id)?;

        if let Some(head) = uow.reservations().queue_head(reservation.book_id)? {
            if head.id != reservation.id {
                return Err(BiblioError::ReservationConflict(format!(
                    "member {} is ahead in the queue for book {} (reservation {})",
                    head.member_id, reservation.book_id, head.id
                )));
            }
        }

        let book = require_book(uow, reservation.book_id)?;
        let member = require_member(uow, reservation.member_id)?;
        ensure_on_shelf(uow, &book)?;
        ensure_below_limit(uow, &member)?;

        uow.reservations().delete(reservation.id)?;
        let loan = uow.loans().add(NewLoan {
            member_id: member.id,
            book_id: book.id,
            loan_date: self.clock.now(),
        })?;
        tracing::debug!(
            reservation = %reservation.id,
            loan = %loan.id,
            "reservation fulfilled"
        );
        Ok(loan)
    }

    /// Drop a reservation from its queue
    pub fn cancel(
        &self,
        uow: &mut dyn UnitOfWork,
        reservation_id: ReservationId,
    ) -> BiblioResult<Reservation> {
        let reservation = require_reservation(uow, reservation_id)?;
        uow.reservations().delete(reservation.id)?;
        tracing::debug!(reservation = %reservation.id, "reservation cancelled");
        Ok(reservation)
    }
}
