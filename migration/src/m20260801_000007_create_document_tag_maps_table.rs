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
    m20260801_000002_create_tags_table::Tag, m20260801_000006_create_documents_table::Document,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique constraint on (document_id, tag_id): a request repeating
        // a tag id inserts two rows.
        manager
            .create_table(
                Table::create()
                    .table(DocumentTagMap::Table)
                    .if_not_exists()
                    .col(pk_auto(DocumentTagMap::Id))
                    .col(integer(DocumentTagMap::DocumentId))
                    .col(integer(DocumentTagMap::TagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-document_tag_maps-document_id")
                            .from(DocumentTagMap::Table, DocumentTagMap::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-document_tag_maps-tag_id")
                            .from(DocumentTagMap::Table, DocumentTagMap::TagId)
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
            .drop_table(Table::drop().table(DocumentTagMap::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DocumentTagMap {
    #[sea_orm(iden = "document_tag_maps")]
    Table,
    Id,
    DocumentId,
    TagId,
}
