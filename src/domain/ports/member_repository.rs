//! MemberRepository port

use super::StoreResult;
use crate::domain::entities::{Member, NewMember};
use crate::domain::value_objects::{MemberId, MemberSort};

pub trait MemberRepository {
    fn get(&self, id: MemberId) -> StoreResult<Option<Member>>;

    /// Insert a member; the store assigns its identity
    fn add(&mut self, member: NewMember) -> StoreResult<Member>;

    fn update(&mut self, member: &Member) -> StoreResult<()>;

    fn delete(&mut self, id: MemberId) -> StoreResult<()>;

    fn get_all(&self, sort: MemberSort) -> StoreResult<Vec<Member>>;
}
