//! Reservation entity
//!
//! Reservations of one book form a FIFO queue. The queue position is decided
//! by `reservation_date`, then by the store-assigned `sequence`, so two
//! reservations placed within the same clock tick still have a strict order.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{BookId, MemberId, ReservationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub member_id: MemberId,
    pub book_id: BookId,
    pub reservation_date: DateTime<Utc>,
    pub sequence: u64,
}

impl Reservation {
    /// Key that orders a book's reservation queue
    pub fn queue_key(&self) -> (DateTime<Utc>, u64) {
        (self.reservation_date, self.sequence)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub member_id: MemberId,
    pub book_id: BookId,
    pub reservation_date: DateTime<Utc>,
}

impl NewReservation {
    pub fn into_reservation(self, id: ReservationId, sequence: u64) -> Reservation {
        Reservation {
            id,
            member_id: self.member_id,
            book_id: self.book_id,
            reservation_date: self.reservation_date,
            sequence,
        }
    }
}
