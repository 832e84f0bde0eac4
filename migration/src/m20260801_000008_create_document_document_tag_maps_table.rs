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
    m20260801_000003_create_document_tags_table::DocumentTag,
    m20260801_000006_create_documents_table::Document,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentDocumentTagMap::Table)
                    .if_not_exists()
                    .col(pk_auto(DocumentDocumentTagMap::Id))
                    .col(integer(DocumentDocumentTagMap::DocumentId))
                    .col(integer(DocumentDocumentTagMap::DocumentTagId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-document_document_tag_maps-document_id")
                            .from(
                                DocumentDocumentTagMap::Table,
                                DocumentDocumentTagMap::DocumentId,
                            )
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-document_document_tag_maps-document_tag_id")
                            .from(
                                DocumentDocumentTagMap::Table,
                                DocumentDocumentTagMap::DocumentTagId,
                            )
                            .to(DocumentTag::Table, DocumentTag::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(DocumentDocumentTagMap::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DocumentDocumentTagMap {
    #[sea_orm(iden = "document_document_tag_maps")]
    Table,
    Id,
    DocumentId,
    DocumentTagId,
}
