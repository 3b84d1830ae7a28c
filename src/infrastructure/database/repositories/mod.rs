//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod item_repository;
pub mod member_repository;
pub mod repository_provider;
pub mod team_repository;

pub use item_repository::SeaOrmItemRepository;
pub use member_repository::SeaOrmMemberRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use team_repository::SeaOrmTeamRepository;

use sea_orm::DbErr;

use crate::domain::{DomainError, DomainResult};

/// Collapse the rows of a query declared to return at most one result.
fn single_result<T>(entity: &'static str, mut rows: Vec<T>) -> DomainResult<Option<T>> {
    match rows.len() {
        0 | 1 => Ok(rows.pop()),
        actual => Err(DomainError::IncorrectResultSize { entity, actual }),
    }
}

/// An update that touched no row means the key is gone.
fn update_err(entity: &'static str, id: impl ToString) -> impl FnOnce(DbErr) -> DomainError {
    move |e| match e {
        DbErr::RecordNotUpdated => DomainError::not_found(entity, "id", id),
        other => DomainError::Database(other),
    }
}
