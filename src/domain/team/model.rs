//! Team domain entity

use crate::domain::auditing::TimeAudit;
use crate::domain::repositories::Persistable;

/// Back reference from a team to one of its members
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRef {
    id: Option<i64>,
    username: String,
}

impl MemberRef {
    pub fn new(id: Option<i64>, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn refers_to(&self, id: Option<i64>, username: &str) -> bool {
        match (self.id, id) {
            (Some(a), Some(b)) => a == b,
            _ => self.username == username,
        }
    }
}

/// Team of members.
///
/// The member list is the inverse side of `Member::team`; only
/// `Member::change_team` and `Member::leave_team` modify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Option<i64>,
    name: String,
    members: Vec<MemberRef>,
    pub audit: TimeAudit,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            members: Vec::new(),
            audit: TimeAudit::default(),
        }
    }

    pub fn restore(id: i64, name: String, members: Vec<MemberRef>, audit: TimeAudit) -> Self {
        Self {
            id: Some(id),
            name,
            members,
            audit,
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn members(&self) -> &[MemberRef] {
        &self.members
    }

    pub(crate) fn attach(&mut self, member: MemberRef) {
        self.members
            .retain(|m| !m.refers_to(member.id, &member.username));
        self.members.push(member);
    }

    pub(crate) fn detach(&mut self, id: Option<i64>, username: &str) {
        self.members.retain(|m| !m.refers_to(id, username));
    }
}

impl Persistable for Team {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }
}
