//! Partial views of members

use super::model::Member;

/// Open projection: computed from the fully loaded entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameOnly {
    username: String,
}

impl UsernameOnly {
    /// Evaluates to `"{username} {age}"`.
    pub fn from_member(member: &Member) -> Self {
        Self {
            username: format!("{} {}", member.username(), member.age()),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Closed projection: the query selects the `username` column only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameOnlyDto {
    pub username: String,
}

impl UsernameOnlyDto {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Member with the name of its team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDto {
    pub id: i64,
    pub username: String,
    pub team_name: Option<String>,
}

impl MemberDto {
    pub fn new(id: i64, username: impl Into<String>, team_name: Option<String>) -> Self {
        Self {
            id,
            username: username.into(),
            team_name,
        }
    }

    /// Build from a stored member. The team name is only known if the team
    /// was fetched with the member. Returns `None` for unsaved members.
    pub fn from_member(member: &Member) -> Option<Self> {
        Some(Self {
            id: member.id()?,
            username: member.username().to_string(),
            team_name: member
                .team()
                .and_then(|t| t.name())
                .map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::TeamRef;

    #[test]
    fn open_projection_joins_username_and_age() {
        let member = Member::with_age("member1", 10);
        assert_eq!(UsernameOnly::from_member(&member).username(), "member1 10");
    }

    #[test]
    fn dto_from_member_with_fetched_team() {
        let member = Member::restore(
            3,
            "AAA".into(),
            10,
            Some(TeamRef::loaded(1, "teamA")),
            Default::default(),
        );
        let dto = MemberDto::from_member(&member).unwrap();
        assert_eq!(dto, MemberDto::new(3, "AAA", Some("teamA".into())));
    }

    #[test]
    fn dto_from_member_with_unloaded_team() {
        let member = Member::restore(3, "AAA".into(), 10, Some(TeamRef::unloaded(1)), Default::default());
        assert_eq!(MemberDto::from_member(&member).unwrap().team_name, None);
    }

    #[test]
    fn dto_requires_stored_member() {
        assert!(MemberDto::from_member(&Member::new("new")).is_none());
    }
}
