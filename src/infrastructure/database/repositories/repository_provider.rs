//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::{AuditingHandler, ItemRepository, MemberRepository, TeamRepository};

use super::item_repository::SeaOrmItemRepository;
use super::member_repository::SeaOrmMemberRepository;
use super::team_repository::SeaOrmTeamRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone(), AuditingHandler::without_auditor());
/// let member = repos.members().find_by_id(1).await?;
/// let team = repos.teams().find_by_name("teamA").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    members: SeaOrmMemberRepository,
    teams: SeaOrmTeamRepository,
    items: SeaOrmItemRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection, auditing: AuditingHandler) -> Self {
        Self {
            members: SeaOrmMemberRepository::new(db.clone(), auditing.clone()),
            teams: SeaOrmTeamRepository::new(db.clone()),
            items: SeaOrmItemRepository::new(db, auditing),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn members(&self) -> &dyn MemberRepository {
        &self.members
    }

    fn teams(&self) -> &dyn TeamRepository {
        &self.teams
    }

    fn items(&self) -> &dyn ItemRepository {
        &self.items
    }
}
