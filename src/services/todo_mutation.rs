use chrono::NaiveDate;
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, DbConn, Set};

use crate::entities::{todo, todo_tag_map};

#[derive(Debug, Clone)]
pub struct NewTodo {
    pub user_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub execution_time: Option<i32>,
    pub term_id: Option<i32>,
}

pub struct TodoMutation;

impl TodoMutation {
    pub async fn create(db: &DbConn, form_data: NewTodo) -> Result<todo::Model, DbErr> {
        todo::ActiveModel {
            id: NotSet,
            user_id: Set(form_data.user_id),
            name: Set(form_data.name),
            description: Set(form_data.description),
            date: Set(form_data.date),
            time: Set(form_data.time),
            execution_time: Set(form_data.execution_time),
            term_id: Set(form_data.term_id),
        }
        .insert(db)
        .await
    }

    pub async fn attach_tags(
        db: DatabaseConnection,
        todo_id: i32,
        tag_ids: Vec<i32>,
        awaited: bool,
    ) -> Result<(), DbErr> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        let rows: Vec<todo_tag_map::ActiveModel> = tag_ids
            .into_iter()
            .map(|tag_id| todo_tag_map::ActiveModel {
                id: NotSet,
                todo_id: Set(todo_id),
                tag_id: Set(tag_id),
            })
            .collect();
        if awaited {
            todo_tag_map::Entity::insert_many(rows).exec(&db).await?;
        } else {
            actix_web::rt::spawn(async move {
                if let Err(e) = todo_tag_map::Entity::insert_many(rows).exec(&db).await {
                    tracing::event!(
                        target: "backend",
                        tracing::Level::ERROR,
                        "Failed to link tags to todo {}: {:?}",
                        todo_id,
                        e
                    );
                }
            });
        }
        Ok(())
    }
}
