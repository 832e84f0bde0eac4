use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, ForeignKey, ForeignKeyAction, MigrationTrait, SchemaManager,
        Table,
    },
    schema::{integer, pk_auto},
};

use crate::{
    m20260801_000002_create_tags_table::Tag, m20260801_000005_create_todos_table::Todo,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodoTagMap::Table)
                    .if_not_exists()
                    .col(pk_auto(TodoTagMap::Id))
                    .col(integer(TodoTagMap::TodoId))
                    .col(integer(TodoTagMap::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-todo_tag_maps-todo_id")
                            .from(TodoTagMap::Table, TodoTagMap::TodoId)
                            .to(Todo::Table, Todo::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-todo_tag_maps-tag_id")
                            .from(TodoTagMap::Table, TodoTagMap::TagId)
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
            .drop_table(Table::drop().table(TodoTagMap::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TodoTagMap {
    #[sea_orm(iden = "todo_tag_maps")]
    Table,
    Id,
    TodoId,
    TagId,
}
