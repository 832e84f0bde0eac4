use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, ForeignKey, ForeignKeyAction, MigrationTrait, SchemaManager,
        Table,
    },
    schema::{integer, pk_auto, string},
};

use crate::m20260801_000001_create_users_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentTag::Table)
                    .if_not_exists()
                    .col(pk_auto(DocumentTag::Id))
                    .col(integer(DocumentTag::UserId))
                    .col(string(DocumentTag::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-document_tags-user_id")
                            .from(DocumentTag::Table, DocumentTag::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocumentTag::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DocumentTag {
    #[sea_orm(iden = "document_tags")]
    Table,
    Id,
    UserId,
    Name,
}
