use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, ForeignKey, ForeignKeyAction, MigrationTrait, SchemaManager,
        Table,
    },
    schema::{boolean, integer, integer_null, pk_auto, string},
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
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(pk_auto(Tag::Id))
                    .col(integer(Tag::UserId))
                    .col(string(Tag::Name))
                    .col(string(Tag::ThemeColor).default("ecf0f1"))
                    .col(integer_null(Tag::ParentId))
                    .col(boolean(Tag::Pinned).default(false))
                    .col(integer(Tag::Order).default(0))
                    .col(boolean(Tag::Hidden).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tags-user_id")
                            .from(Tag::Table, Tag::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-tags-parent_id")
                            .from(Tag::Table, Tag::ParentId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tag {
    #[sea_orm(iden = "tags")]
    Table,
    Id,
    UserId,
    Name,
    ThemeColor,
    ParentId,
    Pinned,
    Order,
    Hidden,
}
