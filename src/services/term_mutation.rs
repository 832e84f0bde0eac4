use chrono::NaiveDate;
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, DbConn, Set};

use crate::entities::{term, term_tag_map};

#[derive(Debug, Clone)]
pub struct NewTerm {
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub parent_id: Option<i32>,
}

pub struct TermMutation;

impl TermMutation {
    pub async fn create(db: &DbConn, form_data: NewTerm) -> Result<term::Model, DbErr> {
        term::ActiveModel {
            id: NotSet,
            user_id: Set(form_data.user_id),
            name: Set(form_data.name),
            description: Set(form_data.description),
            start: Set(form_data.start),
            end: Set(form_data.end),
            parent_id: Set(form_data.parent_id),
        }
        .insert(db)
        .await
    }

    pub async fn attach_tags(
        db: DatabaseConnection,
        term_id: i32,
        tag_ids: Vec<i32>,
        awaited: bool,
    ) -> Result<(), DbErr> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        let rows: Vec<term_tag_map::ActiveModel> = tag_ids
            .into_iter()
            .map(|tag_id| term_tag_map::ActiveModel {
                id: NotSet,
                term_id: Set(term_id),
                tag_id: Set(tag_id),
            })
            .collect();
        if awaited {
            term_tag_map::Entity::insert_many(rows).exec(&db).await?;
        } else {
            actix_web::rt::spawn(async move {
                if let Err(e) = term_tag_map::Entity::insert_many(rows).exec(&db).await {
                    tracing::event!(
                        target: "backend",
                        tracing::Level::ERROR,
                        "Failed to link tags to term {}: {:?}",
                        term_id,
                        e
                    );
                }
            });
        }
        Ok(())
    }
}
