use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, ForeignKey, ForeignKeyAction, MigrationTrait, SchemaManager,
        Table,
    },
    schema::{integer, pk_auto, string, string_null},
};

use crate::m20260801_000002_create_tags_table::Tag;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FreeRecordScheme::Table)
                    .if_not_exists()
                    .col(pk_auto(FreeRecordScheme::Id))
                    .col(integer(FreeRecordScheme::TagId))
                    .col(string(FreeRecordScheme::Name))
                    .col(string_null(FreeRecordScheme::UnitName))
                    .col(string(FreeRecordScheme::DefaultGraphType).default("flat"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-free_record_schemes-tag_id")
                            .from(FreeRecordScheme::Table, FreeRecordScheme::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FreeRecordScheme::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FreeRecordScheme {
    #[sea_orm(iden = "free_record_schemes")]
    Table,
    Id,
    TagId,
    Name,
    UnitName,
    DefaultGraphType,
}
