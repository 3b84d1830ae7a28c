//! Member DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Member, MemberDto};

/// Member with the name of its team
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: i64,
    pub username: String,
    /// `null` when the member has no team
    pub team_name: Option<String>,
}

impl From<MemberDto> for MemberResponse {
    fn from(dto: MemberDto) -> Self {
        Self {
            id: dto.id,
            username: dto.username,
            team_name: dto.team_name,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id().unwrap_or_default(),
            team_name: member
                .team()
                .and_then(|t| t.name())
                .map(str::to_string),
            username: member.username().to_string(),
        }
    }
}
