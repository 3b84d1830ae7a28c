//! Create members table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_teams::Teams;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Members::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Members::Username).string().not_null())
                    .col(
                        ColumnDef::new(Members::Age)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Members::TeamId).integer())
                    .col(ColumnDef::new(Members::CreatedDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Members::LastModifiedDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Members::CreatedBy).string())
                    .col(ColumnDef::new(Members::LastModifiedBy).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_members_team")
                            .from(Members::Table, Members::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Username lookups back most query methods
        manager
            .create_index(
                Index::create()
                    .name("idx_members_username")
                    .table(Members::Table)
                    .col(Members::Username)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_members_team_id")
                    .table(Members::Table)
                    .col(Members::TeamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Members {
    Table,
    Id,
    Username,
    Age,
    TeamId,
    CreatedDate,
    LastModifiedDate,
    CreatedBy,
    LastModifiedBy,
}
