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
    m20260801_000002_create_tags_table::Tag, m20260801_000004_create_terms_table::Term,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TermTagMap::Table)
                    .if_not_exists()
                    .col(pk_auto(TermTagMap::Id))
                    .col(integer(TermTagMap::TermId))
                    .col(integer(TermTagMap::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-term_tag_maps-term_id")
                            .from(TermTagMap::Table, TermTagMap::TermId)
                            .to(Term::Table, Term::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-term_tag_maps-tag_id")
                            .from(TermTagMap::Table, TermTagMap::TagId)
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
            .drop_table(Table::drop().table(TermTagMap::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TermTagMap {
    #[sea_orm(iden = "term_tag_maps")]
    Table,
    Id,
    TermId,
    TagId,
}
