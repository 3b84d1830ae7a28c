//! Unit of work over member storage
//!
//! Members loaded through a [`UnitOfWork`] are tracked: repeated lookups by
//! key return the same in-memory copy, and [`UnitOfWork::flush`] writes back
//! every member whose state differs from what was loaded. Bulk updates go
//! straight to the store and are not reflected in tracked copies until the
//! unit of work is cleared.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use log::debug;

use crate::domain::{DomainError, DomainResult, Member, MemberRepository, ReadOnly};

/// What to do with tracked members after a bulk update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearMode {
    /// Drop every tracked member so later lookups reload from the store
    Automatically,
    /// Keep tracked members as they are; they may be stale
    Manual,
}

struct Tracked {
    current: Member,
    snapshot: Member,
}

impl Tracked {
    fn new(member: Member) -> Self {
        Self {
            snapshot: member.clone(),
            current: member,
        }
    }

    fn is_dirty(&self) -> bool {
        self.current != self.snapshot
    }
}

pub struct UnitOfWork<'a> {
    members: &'a dyn MemberRepository,
    tracked: BTreeMap<i64, Tracked>,
}

impl<'a> UnitOfWork<'a> {
    pub fn new(members: &'a dyn MemberRepository) -> Self {
        Self {
            members,
            tracked: BTreeMap::new(),
        }
    }

    /// Save `member` now and track the stored state.
    pub async fn persist(&mut self, member: Member) -> DomainResult<&mut Member> {
        let saved = self.members.save(member).await?;
        let id = saved
            .id()
            .ok_or_else(|| DomainError::Validation("Saved member has no id".into()))?;
        let tracked = match self.tracked.entry(id) {
            Entry::Occupied(mut entry) => {
                entry.insert(Tracked::new(saved));
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(Tracked::new(saved)),
        };
        Ok(&mut tracked.current)
    }

    /// Tracked member by key, loading it on first access.
    pub async fn find(&mut self, id: i64) -> DomainResult<Option<&mut Member>> {
        if !self.tracked.contains_key(&id) {
            match self.members.find_by_id(id).await? {
                Some(member) => {
                    self.tracked.insert(id, Tracked::new(member));
                }
                None => return Ok(None),
            }
        }
        Ok(self.tracked.get_mut(&id).map(|t| &mut t.current))
    }

    /// Query by username and start tracking every match.
    ///
    /// Rows already tracked resolve to their in-memory copy, not to the
    /// freshly read row. The returned members are snapshots: editing them
    /// changes nothing in the context, so go through [`UnitOfWork::find`]
    /// with the member's id for changes that `flush` should write.
    pub async fn find_by_username(&mut self, username: &str) -> DomainResult<Vec<Member>> {
        let rows = self.members.find_by_username(username).await?;
        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(id) = row.id() else { continue };
            let tracked = self.tracked.entry(id).or_insert_with(|| Tracked::new(row));
            result.push(tracked.current.clone());
        }
        Ok(result)
    }

    /// Read outside tracking. The result is never flushed.
    pub async fn find_read_only_by_username(
        &self,
        username: &str,
    ) -> DomainResult<Option<ReadOnly<Member>>> {
        self.members.find_read_only_by_username(username).await
    }

    pub fn is_tracked(&self, id: i64) -> bool {
        self.tracked.contains_key(&id)
    }

    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    /// Write every changed member. Returns how many were written.
    pub async fn flush(&mut self) -> DomainResult<usize> {
        let members = self.members;
        let mut written = 0;
        for tracked in self.tracked.values_mut().filter(|t| t.is_dirty()) {
            let saved = members.save(tracked.current.clone()).await?;
            *tracked = Tracked::new(saved);
            written += 1;
        }
        if written > 0 {
            debug!("Flushed {} members", written);
        }
        Ok(written)
    }

    /// Forget every tracked member. Unflushed changes are lost.
    pub fn clear(&mut self) {
        self.tracked.clear();
    }

    /// Flush, then `age = age + 1` for every member with `age >= age`.
    pub async fn bulk_age_plus(&mut self, age: i32, mode: ClearMode) -> DomainResult<u64> {
        self.flush().await?;
        let updated = self.members.bulk_age_plus(age).await?;
        if mode == ClearMode::Automatically {
            self.clear();
        }
        Ok(updated)
    }
}
