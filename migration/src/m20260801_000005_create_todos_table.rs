use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, ForeignKey, ForeignKeyAction, MigrationTrait, SchemaManager,
        Table,
    },
    schema::{date_null, integer, integer_null, pk_auto, string, string_null},
};

use crate::{
    m20260801_000001_create_users_table::User, m20260801_000004_create_terms_table::Term,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Todo::Table)
                    .if_not_exists()
                    .col(pk_auto(Todo::Id))
                    .col(integer(Todo::UserId))
                    .col(string(Todo::Name))
                    .col(string_null(Todo::Description))
                    .col(date_null(Todo::Date))
                    .col(string_null(Todo::Time))
                    .col(integer_null(Todo::ExecutionTime))
                    .col(integer_null(Todo::TermId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-todos-user_id")
                            .from(Todo::Table, Todo::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-todos-term_id")
                            .from(Todo::Table, Todo::TermId)
                            .to(Term::Table, Term::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Todo::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Todo {
    #[sea_orm(iden = "todos")]
    Table,
    Id,
    UserId,
    Name,
    Description,
    Date,
    Time,
    ExecutionTime,
    TermId,
}
