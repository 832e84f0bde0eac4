use sea_orm::{
    entity::prelude::*, sea_query::Expr, ActiveValue::NotSet, DbConn, QueryTrait, Set,
};

use crate::entities::tag;

#[derive(Debug, Clone)]
pub struct NewTag {
    pub user_id: i32,
    pub name: String,
    pub theme_color: String,
    pub parent_id: Option<i32>,
    pub pinned: bool,
}

/// Partial update. `parent_id` is doubly optional so a present `null`
/// detaches the tag from its parent.
#[derive(Debug, Clone, Default)]
pub struct TagChangeset {
    pub name: Option<String>,
    pub theme_color: Option<String>,
    pub parent_id: Option<Option<i32>>,
    pub pinned: Option<bool>,
    pub order: Option<i32>,
    pub hidden: Option<bool>,
}

pub struct TagMutation;

impl TagMutation {
    pub async fn create(db: &DbConn, form_data: NewTag) -> Result<tag::Model, DbErr> {
        tag::ActiveModel {
            id: NotSet,
            user_id: Set(form_data.user_id),
            name: Set(form_data.name),
            theme_color: Set(form_data.theme_color),
            parent_id: Set(form_data.parent_id),
            pinned: Set(form_data.pinned),
            order: NotSet,
            hidden: NotSet,
        }
        .insert(db)
        .await
    }

    /// Returns the number of rows matched. Setting a column to the value
    /// it already has still counts as a match.
    pub async fn update(
        db: &DbConn,
        id: i32,
        user_id: i32,
        changes: TagChangeset,
    ) -> Result<u64, DbErr> {
        let result = tag::Entity::update_many()
            .filter(tag::Column::Id.eq(id))
            .filter(tag::Column::UserId.eq(user_id))
            .apply_if(changes.name, |q, v| {
                q.col_expr(tag::Column::Name, Expr::value(v))
            })
            .apply_if(changes.theme_color, |q, v| {
                q.col_expr(tag::Column::ThemeColor, Expr::value(v))
            })
            .apply_if(changes.parent_id, |q, v| {
                q.col_expr(tag::Column::ParentId, Expr::value(v))
            })
            .apply_if(changes.pinned, |q, v| {
                q.col_expr(tag::Column::Pinned, Expr::value(v))
            })
            .apply_if(changes.order, |q, v| {
                q.col_expr(tag::Column::Order, Expr::value(v))
            })
            .apply_if(changes.hidden, |q, v| {
                q.col_expr(tag::Column::Hidden, Expr::value(v))
            })
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete(db: &DbConn, id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = tag::Entity::delete_many()
            .filter(tag::Column::Id.eq(id))
            .filter(tag::Column::UserId.eq(user_id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}
