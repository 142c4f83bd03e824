//! Member service

use crate::domain::entities::{Member, NewMember};
use crate::domain::ports::UnitOfWork;
use crate::domain::value_objects::{LoanSort, MemberId, ReservationSort};
use crate::error::{BiblioError, BiblioResult};

use super::lookup::require_member;

#[derive(Debug, Clone, Copy, Default)]
pub struct MemberService;

impl MemberService {
    pub fn new() -> Self {
        Self
    }

    pub fn register(&self, uow: &mut dyn UnitOfWork, member: NewMember) -> BiblioResult<Member> {
        if member.name.trim().is_empty() {
            return Err(BiblioError::InvalidArgument(
                "member name must not be empty".to_string(),
            ));
        }
        if member.phone.trim().is_empty() {
            return Err(BiblioError::InvalidArgument(
                "member phone must not be empty".to_string(),
            ));
        }
        if member.loan_limit == 0 {
            return Err(BiblioError::InvalidArgument(
                "loan limit must be at least 1".to_string(),
            ));
        }

        let member = uow.members().add(member)?;
        tracing::debug!(member = %member.id, "member registered");
        Ok(member)
    }

    /// Remove a member who holds nothing, along with their returned loans
    pub fn withdraw(&self, uow: &mut dyn UnitOfWork, member_id: MemberId) -> BiblioResult<Member> {
        let member = require_member(uow, member_id)?;

        let loans = uow.loans().find_by_member(member.id, LoanSort::LoanDate)?;
        if let Some(active) = loans.iter().find(|l| l.is_active()) {
            return Err(BiblioError::LoanConflict(format!(
                "member {} still has book {} (loan {})",
                member.id, active.book_id, active.id
            )));
        }

        let reservations = uow
            .reservations()
            .find_by_member(member.id, ReservationSort::Queue)?;
        if let Some(first) = reservations.first() {
            return Err(BiblioError::ReservationConflict(format!(
                "member {} still has reservation {} on book {}",
                member.id, first.id, first.book_id
            )));
        }

        for loan in &loans {
            uow.loans().delete(loan.id)?;
        }
        uow.members().delete(member.id)?;
        tracing::debug!(member = %member.id, history = loans.len(), "member withdrawn");
        Ok(member)
    }
}
