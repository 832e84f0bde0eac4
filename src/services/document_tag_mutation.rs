use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DbConn, Set};

use crate::entities::document_tag;

pub struct DocumentTagMutation;

impl DocumentTagMutation {
    pub async fn create(
        db: &DbConn,
        user_id: i32,
        name: String,
    ) -> Result<document_tag::Model, DbErr> {
        document_tag::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            name: Set(name),
        }
        .insert(db)
        .await
    }
}
