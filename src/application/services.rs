//! The domain services, constructed once and shared by every command

use std::sync::Arc;

use crate::domain::ports::Clock;
use crate::domain::services::{
    BookService, LoanService, MemberService, QueryService, ReservationService,
};

pub struct Services {
    pub books: BookService,
    pub members: MemberService,
    pub loans: LoanService,
    pub reservations: ReservationService,
    pub queries: QueryService,
}

impl Services {
    /// Wire every service; loans and reservations read "now" from `clock`
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            books: BookService::new(),
            members: MemberService::new(),
            loans: LoanService::new(clock.clone()),
            reservations: ReservationService::new(clock),
            queries: QueryService::new(),
        }
    }
}
