use sea_orm::{entity::prelude::*, DbConn, QueryOrder};

use crate::{
    entities::tag,
    types::{TagVisible, TagWithChildren},
};

pub struct TagQuery;

impl TagQuery {
    pub async fn find_by_id_and_user_id(
        db: &DbConn,
        id: i32,
        user_id: i32,
    ) -> Result<Option<tag::Model>, DbErr> {
        tag::Entity::find_by_id(id)
            .filter(tag::Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    pub async fn find_children(
        db: &DbConn,
        parent_id: i32,
        user_id: i32,
    ) -> Result<Vec<tag::Model>, DbErr> {
        tag::Entity::find()
            .filter(tag::Column::UserId.eq(user_id))
            .filter(tag::Column::ParentId.eq(parent_id))
            .order_by_asc(tag::Column::Id)
            .all(db)
            .await
    }

    /// Top-level tags with their children grouped underneath. Childless
    /// parents are included with an empty `tags` array.
    pub async fn find_all_with_children(
        db: &DbConn,
        user_id: i32,
    ) -> Result<Vec<TagWithChildren>, DbErr> {
        let all = tag::Entity::find()
            .filter(tag::Column::UserId.eq(user_id))
            .order_by_asc(tag::Column::Id)
            .all(db)
            .await?;

        let (parents, children): (Vec<tag::Model>, Vec<tag::Model>) =
            all.into_iter().partition(|t| t.parent_id.is_none());

        Ok(parents
            .into_iter()
            .map(|parent| {
                let sub_tags: Vec<TagVisible> = children
                    .iter()
                    .filter(|child| child.parent_id == Some(parent.id))
                    .cloned()
                    .map(TagVisible::from)
                    .collect();
                TagWithChildren {
                    id: parent.id,
                    name: parent.name,
                    theme_color: parent.theme_color,
                    pinned: parent.pinned,
                    order: parent.order,
                    hidden: parent.hidden,
                    tags: sub_tags,
                }
            })
            .collect())
    }
}
