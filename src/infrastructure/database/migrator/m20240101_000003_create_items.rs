//! Create items table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Items::CreatedDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Items::LastModifiedDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Items::CreatedBy).string())
                    .col(ColumnDef::new(Items::LastModifiedBy).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Items {
    Table,
    Id,
    CreatedDate,
    LastModifiedDate,
    CreatedBy,
    LastModifiedBy,
}
