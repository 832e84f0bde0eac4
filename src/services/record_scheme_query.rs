use sea_orm::{entity::prelude::*, DbConn};

use crate::entities::free_record_scheme;

pub struct RecordSchemeQuery;

impl RecordSchemeQuery {
    pub async fn find_by_id_and_tag_id(
        db: &DbConn,
        id: i32,
        tag_id: i32,
    ) -> Result<Option<free_record_scheme::Model>, DbErr> {
        free_record_scheme::Entity::find_by_id(id)
            .filter(free_record_scheme::Column::TagId.eq(tag_id))
            .one(db)
            .await
    }
}
