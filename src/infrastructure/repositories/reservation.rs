//! ReservationRepository over the in-memory reservation table

use crate::domain::entities::{NewReservation, Reservation};
use crate::domain::ports::{ReservationRepository, StoreError, StoreResult};
use crate::domain::value_objects::{
    BookId, EntityKind, MemberId, ReservationId, ReservationSort,
};
use crate::infrastructure::store::{next_id, ReservationTable};

impl ReservationTable {
    fn select(&self, keep: impl Fn(&Reservation) -> bool, sort: ReservationSort) -> Vec<Reservation> {
        let mut reservations: Vec<Reservation> =
            self.rows.values().filter(|r| keep(r)).cloned().collect();
        if sort == ReservationSort::Queue {
            reservations.sort_by_key(Reservation::queue_key);
        }
        reservations
    }
}

impl ReservationRepository for ReservationTable {
    fn get(&self, id: ReservationId) -> StoreResult<Option<Reservation>> {
        Ok(self.rows.get(&id).cloned())
    }

    fn add(&mut self, reservation: NewReservation) -> StoreResult<Reservation> {
        let id = ReservationId::new(next_id(&mut self.last_id));
        let sequence = next_id(&mut self.last_sequence);
        let reservation = reservation.into_reservation(id, sequence);
        self.rows.insert(id, reservation.clone());
        Ok(reservation)
    }

    fn update(&mut self, reservation: &Reservation) -> StoreResult<()> {
        match self.rows.get_mut(&reservation.id) {
            Some(row) => {
                *row = reservation.clone();
                Ok(())
            }
            None => Err(StoreError::NoRowAffected {
                kind: EntityKind::Reservation,
                id: reservation.id.get(),
            }),
        }
    }

    fn delete(&mut self, id: ReservationId) -> StoreResult<()> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NoRowAffected {
                kind: EntityKind::Reservation,
                id: id.get(),
            })
    }

    fn find_by_book(&self, book: BookId, sort: ReservationSort) -> StoreResult<Vec<Reservation>> {
        Ok(self.select(|r| r.book_id == book, sort))
    }

    fn find_by_member(
        &self,
        member: MemberId,
        sort: ReservationSort,
    ) -> StoreResult<Vec<Reservation>> {
        Ok(self.select(|r| r.member_id == member, sort))
    }

    fn get_all(&self, sort: ReservationSort) -> StoreResult<Vec<Reservation>> {
        Ok(self.select(|_| true, sort))
    }
}
