//! Shared setup for integration tests: a migrated private in-memory database.

#![allow(dead_code)]

use std::sync::Arc;

use member_service::domain::{AuditingHandler, AuditorProvider};
use member_service::{init_database, DatabaseConfig, Migrator, SeaOrmRepositoryProvider};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

pub async fn setup_db() -> DatabaseConnection {
    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn setup_repos() -> (DatabaseConnection, SeaOrmRepositoryProvider) {
    setup_repos_with(AuditingHandler::without_auditor()).await
}

pub async fn setup_repos_with(
    auditing: AuditingHandler,
) -> (DatabaseConnection, SeaOrmRepositoryProvider) {
    let db = setup_db().await;
    let repos = SeaOrmRepositoryProvider::new(db.clone(), auditing);
    (db, repos)
}

/// Auditor that always reports the same actor.
pub struct FixedAuditor(pub &'static str);

impl AuditorProvider for FixedAuditor {
    fn current_auditor(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

pub fn fixed_auditing(name: &'static str) -> AuditingHandler {
    AuditingHandler::new(Arc::new(FixedAuditor(name)))
}
