use sea_orm::{entity::prelude::*, DbConn, QueryOrder};

use crate::entities::document_tag;

pub struct DocumentTagQuery;

impl DocumentTagQuery {
    pub async fn find_all_by_user_id(
        db: &DbConn,
        user_id: i32,
    ) -> Result<Vec<document_tag::Model>, DbErr> {
        document_tag::Entity::find()
            .filter(document_tag::Column::UserId.eq(user_id))
            .order_by_asc(document_tag::Column::Id)
            .all(db)
            .await
    }
}
