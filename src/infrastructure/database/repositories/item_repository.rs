//! SeaORM implementation of ItemRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::update_err;
use crate::domain::{
    AuditMetadata, AuditingHandler, CrudRepository, DomainError, DomainResult, Item,
    ItemRepository,
};
use crate::infrastructure::database::entities::item;

const ENTITY: &str = "Item";

pub struct SeaOrmItemRepository {
    db: DatabaseConnection,
    auditing: AuditingHandler,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection, auditing: AuditingHandler) -> Self {
        Self { db, auditing }
    }
}

fn model_to_domain(m: item::Model) -> Item {
    Item::restore(
        m.id,
        AuditMetadata::restore(
            m.created_date,
            m.last_modified_date,
            m.created_by,
            m.last_modified_by,
        ),
    )
}

#[async_trait]
impl CrudRepository<Item, String> for SeaOrmItemRepository {
    /// New items are inserted straight away; no lookup by key happens first.
    async fn save(&self, mut entity: Item) -> DomainResult<Item> {
        let is_new = self.auditing.mark_for_save(&mut entity);
        let active = item::ActiveModel {
            id: Set(entity.id().to_string()),
            created_date: Set(entity.audit.created_date()),
            last_modified_date: Set(entity.audit.last_modified_date()),
            created_by: Set(entity.audit.created_by().map(str::to_string)),
            last_modified_by: Set(entity.audit.last_modified_by().map(str::to_string)),
        };

        let model = if is_new {
            debug!("Inserting item: {}", entity.id());
            active.insert(&self.db).await?
        } else {
            debug!("Updating item: {}", entity.id());
            active
                .update(&self.db)
                .await
                .map_err(update_err(ENTITY, entity.id()))?
        };
        Ok(model_to_domain(model))
    }

    async fn find_by_id(&self, id: String) -> DomainResult<Option<Item>> {
        let model = item::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Item>> {
        let rows = item::Entity::find()
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(model_to_domain).collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(item::Entity::find().count(&self.db).await?)
    }

    async fn delete(&self, entity: &Item) -> DomainResult<()> {
        item::Entity::delete_by_id(entity.id().to_string())
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: String) -> DomainResult<()> {
        let result = item::Entity::delete_by_id(id.clone()).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ENTITY, "id", id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = item::Entity::delete_many().exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

impl ItemRepository for SeaOrmItemRepository {}
