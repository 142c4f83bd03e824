//! Identity resolution shared by the services
//!
//! Each helper turns an id into its entity or a `MissingEntity` error.

use crate::domain::entities::{Book, Loan, Member, Reservation};
use crate::domain::ports::UnitOfWork;
use crate::domain::value_objects::{BookId, EntityKind, LoanId, MemberId, ReservationId};
use crate::error::{BiblioError, BiblioResult};

pub(crate) fn require_book(uow: &mut dyn UnitOfWork, id: BookId) -> BiblioResult<Book> {
    uow.books()
        .get(id)?
        .ok_or_else(|| BiblioError::missing(EntityKind::Book, id))
}

pub(crate) fn require_member(uow: &mut dyn UnitOfWork, id: MemberId) -> BiblioResult<Member> {
    uow.members()
        .get(id)?
        .ok_or_else(|| BiblioError::missing(EntityKind::Member, id))
}

pub(crate) fn require_loan(uow: &mut dyn UnitOfWork, id: LoanId) -> BiblioResult<Loan> {
    uow.loans()
        .get(id)?
        .ok_or_else(|| BiblioError::missing(EntityKind::Loan, id))
}

pub(crate) fn require_reservation(
    uow: &mut dyn UnitOfWork,
    id: ReservationId,
) -> BiblioResult<Reservation> {
    uow.reservations()
        .get(id)?
        .ok_or_else(|| BiblioError::missing(EntityKind::Reservation, id))
}
