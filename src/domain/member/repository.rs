use async_trait::async_trait;

use super::{Member, MemberDto, UsernameOnly, UsernameOnlyDto};
use crate::domain::repositories::{CrudRepository, DomainResult, ReadOnly};
use crate::shared::{Page, PageRequest, Slice};

/// Hand-written queries that do not fit the regular query methods.
#[async_trait]
pub trait MemberCustomRepository: Send + Sync {
    /// Every member, loaded through a literal SQL statement.
    async fn find_member_custom(&self) -> DomainResult<Vec<Member>>;
}

/// Member persistence.
///
/// Single-result lookups return `Ok(None)` on no match and
/// `DomainError::IncorrectResultSize` when more than one row matches.
/// List lookups never fail on an empty result.
#[async_trait]
pub trait MemberRepository: CrudRepository<Member, i64> + MemberCustomRepository {
    /// Paged listing with the team fetched for every member.
    async fn find_all_page(&self, request: &PageRequest) -> DomainResult<Page<Member>>;

    async fn find_by_username_and_age_greater_than(
        &self,
        username: &str,
        age: i32,
    ) -> DomainResult<Vec<Member>>;

    /// First three members by key.
    async fn find_top3(&self) -> DomainResult<Vec<Member>>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Vec<Member>>;

    async fn find_user(&self, username: &str, age: i32) -> DomainResult<Vec<Member>>;

    async fn find_username_list(&self) -> DomainResult<Vec<String>>;

    /// Members joined with their team. Members without a team are skipped.
    async fn find_member_dto(&self) -> DomainResult<Vec<MemberDto>>;

    async fn find_by_names(&self, names: &[String]) -> DomainResult<Vec<Member>>;

    async fn find_list_by_username(&self, username: &str) -> DomainResult<Vec<Member>>;

    async fn find_member_by_username(&self, username: &str) -> DomainResult<Option<Member>>;

    async fn find_optional_by_username(&self, username: &str) -> DomainResult<Option<Member>>;

    async fn find_by_age(&self, age: i32, request: &PageRequest) -> DomainResult<Page<Member>>;

    async fn find_slice_by_age(&self, age: i32, request: &PageRequest)
        -> DomainResult<Slice<Member>>;

    /// `age = age + 1` for every member with `age >= age`, straight in the
    /// store. Returns the number of updated rows.
    async fn bulk_age_plus(&self, age: i32) -> DomainResult<u64>;

    /// Members with teams, inner join.
    async fn find_member_fetch_join(&self) -> DomainResult<Vec<Member>>;

    /// All members with their team loaded when they have one.
    async fn find_member_entity_graph(&self) -> DomainResult<Vec<Member>>;

    async fn find_entity_graph_by_username(&self, username: &str) -> DomainResult<Vec<Member>>;

    async fn find_read_only_by_username(
        &self,
        username: &str,
    ) -> DomainResult<Option<ReadOnly<Member>>>;

    /// Select with a shared row lock clause.
    async fn find_lock_by_username(&self, username: &str) -> DomainResult<Vec<Member>>;

    async fn find_projections_by_username(&self, username: &str)
        -> DomainResult<Vec<UsernameOnly>>;

    async fn find_username_only_by_username(
        &self,
        username: &str,
    ) -> DomainResult<Vec<UsernameOnlyDto>>;
}
