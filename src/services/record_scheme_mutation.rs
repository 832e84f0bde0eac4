use sea_orm::{
    entity::prelude::*, sea_query::Expr, ActiveValue::NotSet, DbConn, QueryTrait, Set,
};

use crate::entities::free_record_scheme;

#[derive(Debug, Clone)]
pub struct NewRecordScheme {
    pub tag_id: i32,
    pub name: String,
    pub unit_name: Option<String>,
    pub default_graph_type: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordSchemeChangeset {
    pub name: Option<String>,
    pub unit_name: Option<String>,
    pub default_graph_type: Option<String>,
}

pub struct RecordSchemeMutation;

impl RecordSchemeMutation {
    pub async fn create(
        db: &DbConn,
        form_data: NewRecordScheme,
    ) -> Result<free_record_scheme::Model, DbErr> {
        free_record_scheme::ActiveModel {
            id: NotSet,
            tag_id: Set(form_data.tag_id),
            name: Set(form_data.name),
            unit_name: Set(form_data.unit_name),
            default_graph_type: match form_data.default_graph_type {
                Some(graph_type) => Set(graph_type),
                None => NotSet,
            },
        }
        .insert(db)
        .await
    }

    pub async fn update(
        db: &DbConn,
        id: i32,
        tag_id: i32,
        changes: RecordSchemeChangeset,
    ) -> Result<u64, DbErr> {
        let result = free_record_scheme::Entity::update_many()
            .filter(free_record_scheme::Column::Id.eq(id))
            .filter(free_record_scheme::Column::TagId.eq(tag_id))
            .apply_if(changes.name, |q, v| {
                q.col_expr(free_record_scheme::Column::Name, Expr::value(v))
            })
            .apply_if(changes.unit_name, |q, v| {
                q.col_expr(free_record_scheme::Column::UnitName, Expr::value(v))
            })
            .apply_if(changes.default_graph_type, |q, v| {
                q.col_expr(free_record_scheme::Column::DefaultGraphType, Expr::value(v))
            })
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete(db: &DbConn, id: i32, tag_id: i32) -> Result<u64, DbErr> {
        let result = free_record_scheme::Entity::delete_many()
            .filter(free_record_scheme::Column::Id.eq(id))
            .filter(free_record_scheme::Column::TagId.eq(tag_id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}
