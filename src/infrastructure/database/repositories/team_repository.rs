//! SeaORM implementation of TeamRepository
//!
//! Loaded teams carry the back references of their members. Timestamps are
//! stamped by the entity's `before_save` hook.

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select, Set,
};

use super::{single_result, update_err};
use crate::domain::{
    CrudRepository, DomainError, DomainResult, MemberRef, Team, TeamRepository, TimeAudit,
};
use crate::infrastructure::database::entities::{member, team};

const ENTITY: &str = "Team";

pub struct SeaOrmTeamRepository {
    db: DatabaseConnection,
}

impl SeaOrmTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load(&self, query: Select<team::Entity>) -> DomainResult<Vec<Team>> {
        let rows = query
            .order_by_asc(team::Column::Id)
            .find_with_related(member::Entity)
            .all(&self.db)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(t, members)| model_to_domain(t, members))
            .collect())
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(t: team::Model, mut members: Vec<member::Model>) -> Team {
    members.sort_by_key(|m| m.id);
    let refs = members
        .into_iter()
        .map(|m| MemberRef::new(Some(m.id), m.username))
        .collect();
    let audit = audit(&t);
    Team::restore(t.id, t.name, refs, audit)
}

fn audit(t: &team::Model) -> TimeAudit {
    TimeAudit::restore(t.created_date, t.updated_date)
}

// ── CrudRepository impl ─────────────────────────────────────────

#[async_trait]
impl CrudRepository<Team, i64> for SeaOrmTeamRepository {
    async fn save(&self, entity: Team) -> DomainResult<Team> {
        let mut active = team::ActiveModel {
            name: Set(entity.name().to_string()),
            ..Default::default()
        };

        let model = match entity.id() {
            None => {
                debug!("Inserting team: {}", entity.name());
                active.insert(&self.db).await?
            }
            Some(id) => {
                debug!("Updating team: {}", id);
                active.id = Set(id);
                active
                    .update(&self.db)
                    .await
                    .map_err(update_err(ENTITY, id))?
            }
        };

        let audit = audit(&model);
        Ok(Team::restore(
            model.id,
            model.name,
            entity.members().to_vec(),
            audit,
        ))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Team>> {
        let teams = self
            .load(team::Entity::find().filter(team::Column::Id.eq(id)))
            .await?;
        Ok(teams.into_iter().next())
    }

    async fn find_all(&self) -> DomainResult<Vec<Team>> {
        self.load(team::Entity::find()).await
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(team::Entity::find().count(&self.db).await?)
    }

    async fn delete(&self, entity: &Team) -> DomainResult<()> {
        if let Some(id) = entity.id() {
            debug!("Deleting team: {}", id);
            team::Entity::delete_by_id(id).exec(&self.db).await?;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        let result = team::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ENTITY, "id", id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = team::Entity::delete_many().exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl TeamRepository for SeaOrmTeamRepository {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Team>> {
        let teams = self
            .load(team::Entity::find().filter(team::Column::Name.eq(name)))
            .await?;
        single_result(ENTITY, teams)
    }
}
