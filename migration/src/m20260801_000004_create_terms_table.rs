use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, ForeignKey, ForeignKeyAction, MigrationTrait, SchemaManager,
        Table,
    },
    schema::{date, integer, integer_null, pk_auto, string, string_null},
};

use crate::m20260801_000001_create_users_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Term::Table)
                    .if_not_exists()
                    .col(pk_auto(Term::Id))
                    .col(integer(Term::UserId))
                    .col(string(Term::Name))
                    .col(string_null(Term::Description))
                    .col(date(Term::Start))
                    .col(date(Term::End))
                    .col(integer_null(Term::ParentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-terms-user_id")
                            .from(Term::Table, Term::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-terms-parent_id")
                            .from(Term::Table, Term::ParentId)
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
            .drop_table(Table::drop().table(Term::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Term {
    #[sea_orm(iden = "terms")]
    Table,
    Id,
    UserId,
    Name,
    Description,
    Start,
    End,
    ParentId,
}
