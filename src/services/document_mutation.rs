use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, DbConn, Set};

use crate::entities::{document, document_document_tag_map, document_tag_map};

#[derive(Debug, Clone)]
pub struct NewDocument {
    pub user_id: i32,
    pub title: String,
    pub url: String,
}

pub struct DocumentMutation;

impl DocumentMutation {
    pub async fn create(db: &DbConn, form_data: NewDocument) -> Result<document::Model, DbErr> {
        document::ActiveModel {
            id: NotSet,
            user_id: Set(form_data.user_id),
            title: Set(form_data.title),
            url: Set(form_data.url),
        }
        .insert(db)
        .await
    }

    /// Inserts the tag association rows. When `awaited` is false the insert
    /// is spawned off the request and insertion failures only get logged;
    /// the owning document exists either way.
    pub async fn attach_tags(
        db: DatabaseConnection,
        document_id: i32,
        tag_ids: Vec<i32>,
        awaited: bool,
    ) -> Result<(), DbErr> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        let rows: Vec<document_tag_map::ActiveModel> = tag_ids
            .into_iter()
            .map(|tag_id| document_tag_map::ActiveModel {
                id: NotSet,
                document_id: Set(document_id),
                tag_id: Set(tag_id),
            })
            .collect();
        if awaited {
            document_tag_map::Entity::insert_many(rows).exec(&db).await?;
        } else {
            actix_web::rt::spawn(async move {
                if let Err(e) = document_tag_map::Entity::insert_many(rows).exec(&db).await {
                    tracing::event!(
                        target: "backend",
                        tracing::Level::ERROR,
                        "Failed to link tags to document {}: {:?}",
                        document_id,
                        e
                    );
                }
            });
        }
        Ok(())
    }

    pub async fn attach_document_tags(
        db: DatabaseConnection,
        document_id: i32,
        document_tag_ids: Vec<i32>,
        awaited: bool,
    ) -> Result<(), DbErr> {
        if document_tag_ids.is_empty() {
            return Ok(());
        }
        let rows: Vec<document_document_tag_map::ActiveModel> = document_tag_ids
            .into_iter()
            .map(|document_tag_id| document_document_tag_map::ActiveModel {
                id: NotSet,
                document_id: Set(document_id),
                document_tag_id: Set(document_tag_id),
            })
            .collect();
        if awaited {
            document_document_tag_map::Entity::insert_many(rows)
                .exec(&db)
                .await?;
        } else {
            actix_web::rt::spawn(async move {
                if let Err(e) = document_document_tag_map::Entity::insert_many(rows)
                    .exec(&db)
                    .await
                {
                    tracing::event!(
                        target: "backend",
                        tracing::Level::ERROR,
                        "Failed to link document tags to document {}: {:?}",
                        document_id,
                        e
                    );
                }
            });
        }
        Ok(())
    }
}
