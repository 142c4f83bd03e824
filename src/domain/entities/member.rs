//! Member entity

use crate::domain::value_objects::MemberId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub phone: String,
    /// Maximum number of simultaneous active loans
    pub loan_limit: u32,
}

impl Member {
    /// Whether a member currently holding `active_loans` may take one more
    pub fn can_borrow(&self, active_loans: usize) -> bool {
        u32::try_from(active_loans).map_or(false, |n| n < self.loan_limit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub phone: String,
    pub loan_limit: u32,
}

impl NewMember {
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            name: self.name,
            phone: self.phone,
            loan_limit: self.loan_limit,
        }
    }
}
