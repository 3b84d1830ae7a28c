//! Member domain entity

use std::fmt;

use crate::domain::auditing::{AuditMetadata, Auditable};
use crate::domain::repositories::{DomainResult, Persistable};
use crate::domain::team::{MemberRef, Team};
use crate::domain::DomainError;

/// Reference from a member to its team.
///
/// The team name is only present when the query fetched the team together
/// with the member; otherwise only the key is known. Two references are
/// equal when they point at the same team.
#[derive(Debug, Clone, Eq)]
pub struct TeamRef {
    id: i64,
    name: Option<String>,
}

impl TeamRef {
    pub fn unloaded(id: i64) -> Self {
        Self { id, name: None }
    }

    pub fn loaded(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.name.is_some()
    }
}

impl PartialEq for TeamRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Club member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: Option<i64>,
    username: String,
    age: i32,
    team: Option<TeamRef>,
    pub audit: AuditMetadata,
}

impl Member {
    pub fn new(username: impl Into<String>) -> Self {
        Self::with_age(username, 0)
    }

    pub fn with_age(username: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            username: username.into(),
            age,
            team: None,
            audit: AuditMetadata::default(),
        }
    }

    /// Create a member already placed in `team`. Both sides are updated.
    pub fn with_team(username: impl Into<String>, age: i32, team: &mut Team) -> DomainResult<Self> {
        let mut member = Self::with_age(username, age);
        member.change_team(team)?;
        Ok(member)
    }

    /// Rebuild a member loaded from storage.
    pub fn restore(
        id: i64,
        username: String,
        age: i32,
        team: Option<TeamRef>,
        audit: AuditMetadata,
    ) -> Self {
        Self {
            id: Some(id),
            username,
            age,
            team,
            audit,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn team(&self) -> Option<&TeamRef> {
        self.team.as_ref()
    }

    pub fn team_id(&self) -> Option<i64> {
        self.team.as_ref().map(TeamRef::id)
    }

    /// Move this member into `team`, updating the team's member list too.
    ///
    /// The team must already be stored. A member without a key is listed on
    /// the team by username until it gets one.
    pub fn change_team(&mut self, team: &mut Team) -> DomainResult<()> {
        let team_id = team.id().ok_or_else(|| {
            DomainError::Validation(format!(
                "Team '{}' must be saved before members can join it",
                team.name()
            ))
        })?;

        self.team = Some(TeamRef::loaded(team_id, team.name()));
        team.attach(MemberRef::new(self.id, self.username.clone()));
        Ok(())
    }

    /// Remove this member from `team` if it is the member's current team.
    pub fn leave_team(&mut self, team: &mut Team) {
        if self.team_id().is_some() && self.team_id() == team.id() {
            self.team = None;
            team.detach(self.id, &self.username);
        }
    }
}

impl Persistable for Member {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Auditable for Member {
    fn audit_metadata_mut(&mut self) -> &mut AuditMetadata {
        &mut self.audit
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(
                f,
                "Member(id={}, username={}, age={})",
                id, self.username, self.age
            ),
            None => write!(f, "Member(id=new, username={}, age={})", self.username, self.age),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_team(id: i64, name: &str) -> Team {
        Team::restore(id, name.to_string(), Vec::new(), Default::default())
    }

    #[test]
    fn new_member_is_new() {
        let m = Member::new("memberA");
        assert!(m.is_new());
        assert_eq!(m.age(), 0);
        assert!(m.team().is_none());
    }

    #[test]
    fn restored_member_is_not_new() {
        let m = Member::restore(7, "AAA".into(), 10, None, AuditMetadata::default());
        assert!(!m.is_new());
        assert_eq!(m.id(), Some(7));
    }

    #[test]
    fn change_team_updates_both_sides() {
        let mut team = stored_team(1, "teamA");
        let mut member = Member::restore(5, "member1".into(), 10, None, Default::default());

        member.change_team(&mut team).unwrap();

        assert_eq!(member.team_id(), Some(1));
        assert_eq!(member.team().and_then(TeamRef::name), Some("teamA"));
        assert_eq!(team.members().len(), 1);
        assert_eq!(team.members()[0].id(), Some(5));
    }

    #[test]
    fn change_team_twice_does_not_duplicate_back_reference() {
        let mut team = stored_team(1, "teamA");
        let mut member = Member::restore(5, "member1".into(), 10, None, Default::default());

        member.change_team(&mut team).unwrap();
        member.change_team(&mut team).unwrap();

        assert_eq!(team.members().len(), 1);
    }

    #[test]
    fn change_team_requires_stored_team() {
        let mut team = Team::new("unsaved");
        let mut member = Member::new("member1");

        let result = member.change_team(&mut team);

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(member.team().is_none());
        assert!(team.members().is_empty());
    }

    #[test]
    fn moving_between_teams() {
        let mut team_a = stored_team(1, "teamA");
        let mut team_b = stored_team(2, "teamB");
        let mut member = Member::with_team("member1", 10, &mut team_a).unwrap();

        member.leave_team(&mut team_a);
        member.change_team(&mut team_b).unwrap();

        assert!(team_a.members().is_empty());
        assert_eq!(team_b.members().len(), 1);
        assert_eq!(member.team_id(), Some(2));
    }

    #[test]
    fn leave_other_team_is_noop() {
        let mut team_a = stored_team(1, "teamA");
        let mut team_b = stored_team(2, "teamB");
        let mut member = Member::with_team("member1", 10, &mut team_a).unwrap();

        member.leave_team(&mut team_b);

        assert_eq!(member.team_id(), Some(1));
        assert_eq!(team_a.members().len(), 1);
    }

    #[test]
    fn team_refs_compare_by_key() {
        assert_eq!(TeamRef::unloaded(3), TeamRef::loaded(3, "teamC"));
        assert!(!TeamRef::unloaded(3).is_loaded());
    }

    #[test]
    fn display_omits_team() {
        let m = Member::with_age("AAA", 10);
        assert_eq!(m.to_string(), "Member(id=new, username=AAA, age=10)");
    }
}
