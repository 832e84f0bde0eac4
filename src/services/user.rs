use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DbConn, Set};

use crate::entities::user;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct Query;

impl Query {
    pub async fn find_by_email(db: &DbConn, email: &str) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await
    }
}

pub struct Mutation;

impl Mutation {
    pub async fn create_user(db: &DbConn, form_data: NewUser) -> Result<user::Model, DbErr> {
        user::ActiveModel {
            id: NotSet,
            name: Set(form_data.name),
            email: Set(form_data.email),
            password: Set(form_data.password),
        }
        .insert(db)
        .await
    }
}
