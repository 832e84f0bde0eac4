use sea_orm::{entity::prelude::*, DbConn, QueryOrder};

use crate::{
    entities::{document, document_document_tag_map, document_tag, document_tag_map, tag},
    types::{DocumentTagVisible, DocumentWithRefs, TagVisible},
};

pub struct DocumentQuery;

impl DocumentQuery {
    /// Documents with their tags and document tags assembled in the app.
    /// A tag linked twice to the same document appears once, in first-seen
    /// order.
    pub async fn find_all_with_refs(
        db: &DbConn,
        user_id: i32,
    ) -> Result<Vec<DocumentWithRefs>, DbErr> {
        let documents = document::Entity::find()
            .filter(document::Column::UserId.eq(user_id))
            .order_by_asc(document::Column::Id)
            .all(db)
            .await?;
        let document_ids: Vec<i32> = documents.iter().map(|d| d.id).collect();

        let tag_links: Vec<(document_tag_map::Model, Option<tag::Model>)> =
            document_tag_map::Entity::find()
                .filter(document_tag_map::Column::DocumentId.is_in(document_ids.clone()))
                .find_also_related(tag::Entity)
                .order_by_asc(document_tag_map::Column::Id)
                .all(db)
                .await?;

        let document_tag_links: Vec<(
            document_document_tag_map::Model,
            Option<document_tag::Model>,
        )> = document_document_tag_map::Entity::find()
            .filter(document_document_tag_map::Column::DocumentId.is_in(document_ids))
            .find_also_related(document_tag::Entity)
            .order_by_asc(document_document_tag_map::Column::Id)
            .all(db)
            .await?;

        Ok(documents
            .into_iter()
            .map(|doc| {
                let mut tags: Vec<TagVisible> = vec![];
                for (link, linked_tag) in &tag_links {
                    if link.document_id != doc.id {
                        continue;
                    }
                    if let Some(linked_tag) = linked_tag {
                        if !tags.iter().any(|t| t.id == linked_tag.id) {
                            tags.push(linked_tag.clone().into());
                        }
                    }
                }
                let mut document_tags: Vec<DocumentTagVisible> = vec![];
                for (link, linked_tag) in &document_tag_links {
                    if link.document_id != doc.id {
                        continue;
                    }
                    if let Some(linked_tag) = linked_tag {
                        if !document_tags.iter().any(|t| t.id == linked_tag.id) {
                            document_tags.push(linked_tag.clone().into());
                        }
                    }
                }
                DocumentWithRefs {
                    id: doc.id,
                    title: doc.title,
                    url: doc.url,
                    tags,
                    document_tags,
                }
            })
            .collect())
    }
}
