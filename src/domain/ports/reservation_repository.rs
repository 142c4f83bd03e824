//! ReservationRepository port

use super::StoreResult;
use crate::domain::entities::{NewReservation, Reservation};
use crate::domain::value_objects::{BookId, MemberId, ReservationId, ReservationSort};

pub trait ReservationRepository {
    fn get(&self, id: ReservationId) -> StoreResult<Option<Reservation>>;

    /// Insert a reservation; the store assigns identity and queue sequence
    fn add(&mut self, reservation: NewReservation) -> StoreResult<Reservation>;

    fn update(&mut self, reservation: &Reservation) -> StoreResult<()>;

    fn delete(&mut self, id: ReservationId) -> StoreResult<()>;

    fn find_by_book(&self, book: BookId, sort: ReservationSort) -> StoreResult<Vec<Reservation>>;

    fn find_by_member(
        &self,
        member: MemberId,
        sort: ReservationSort,
    ) -> StoreResult<Vec<Reservation>>;

    fn get_all(&self, sort: ReservationSort) -> StoreResult<Vec<Reservation>>;

    /// First reservation in `book`'s queue
    fn queue_head(&self, book: BookId) -> StoreResult<Option<Reservation>> {
        Ok(self
            .find_by_book(book, ReservationSort::Queue)?
            .into_iter()
            .next())
    }
}
