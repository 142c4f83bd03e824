//! MemberRepository over the in-memory member table

use crate::domain::entities::{Member, NewMember};
use crate::domain::ports::{MemberRepository, StoreError, StoreResult};
use crate::domain::value_objects::{EntityKind, MemberId, MemberSort};
use crate::infrastructure::store::{next_id, MemberTable};

impl MemberRepository for MemberTable {
    fn get(&self, id: MemberId) -> StoreResult<Option<Member>> {
        Ok(self.rows.get(&id).cloned())
    }

    fn add(&mut self, member: NewMember) -> StoreResult<Member> {
        let id = MemberId::new(next_id(&mut self.last_id));
        let member = member.into_member(id);
        self.rows.insert(id, member.clone());
        Ok(member)
    }

    fn update(&mut self, member: &Member) -> StoreResult<()> {
        match self.rows.get_mut(&member.id) {
            Some(row) => {
                *row = member.clone();
                Ok(())
            }
            None => Err(StoreError::NoRowAffected {
                kind: EntityKind::Member,
                id: member.id.get(),
            }),
        }
    }

    fn delete(&mut self, id: MemberId) -> StoreResult<()> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NoRowAffected {
                kind: EntityKind::Member,
                id: id.get(),
            })
    }

    fn get_all(&self, sort: MemberSort) -> StoreResult<Vec<Member>> {
        let mut members: Vec<Member> = self.rows.values().cloned().collect();
        if sort == MemberSort::Name {
            members.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        }
        Ok(members)
    }
}
