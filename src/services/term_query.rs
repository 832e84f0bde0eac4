use sea_orm::{entity::prelude::*, DbConn, QueryOrder};

use crate::{
    entities::{tag, term, term_tag_map},
    types::{SubTerm, TagVisible, TermWithRefs},
};

pub struct TermQuery;

impl TermQuery {
    /// Top-level terms with nested sub terms and linked tags. A term with
    /// neither shows empty arrays for both.
    pub async fn find_all_with_refs(
        db: &DbConn,
        user_id: i32,
    ) -> Result<Vec<TermWithRefs>, DbErr> {
        let all = term::Entity::find()
            .filter(term::Column::UserId.eq(user_id))
            .order_by_asc(term::Column::Id)
            .all(db)
            .await?;
        let term_ids: Vec<i32> = all.iter().map(|t| t.id).collect();

        let tag_links: Vec<(term_tag_map::Model, Option<tag::Model>)> =
            term_tag_map::Entity::find()
                .filter(term_tag_map::Column::TermId.is_in(term_ids))
                .find_also_related(tag::Entity)
                .order_by_asc(term_tag_map::Column::Id)
                .all(db)
                .await?;

        let (parents, children): (Vec<term::Model>, Vec<term::Model>) =
            all.into_iter().partition(|t| t.parent_id.is_none());

        Ok(parents
            .into_iter()
            .map(|parent| {
                let sub_terms: Vec<SubTerm> = children
                    .iter()
                    .filter(|child| child.parent_id == Some(parent.id))
                    .cloned()
                    .map(SubTerm::from)
                    .collect();
                let mut tags: Vec<TagVisible> = vec![];
                for (link, linked_tag) in &tag_links {
                    if link.term_id != parent.id {
                        continue;
                    }
                    if let Some(linked_tag) = linked_tag {
                        if !tags.iter().any(|t| t.id == linked_tag.id) {
                            tags.push(linked_tag.clone().into());
                        }
                    }
                }
                TermWithRefs {
                    id: parent.id,
                    name: parent.name,
                    description: parent.description,
                    start: parent.start,
                    end: parent.end,
                    tags,
                    sub_terms,
                }
            })
            .collect())
    }
}
