pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users_table;
mod m20260801_000002_create_tags_table;
mod m20260801_000003_create_document_tags_table;
mod m20260801_000004_create_terms_table;
mod m20260801_000005_create_todos_table;
mod m20260801_000006_create_documents_table;
mod m20260801_000007_create_document_tag_maps_table;
mod m20260801_000008_create_document_document_tag_maps_table;
mod m20260801_000009_create_term_tag_maps_table;
mod m20260801_000010_create_todo_tag_maps_table;
mod m20260801_000011_create_free_record_schemes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users_table::Migration),
            Box::new(m20260801_000002_create_tags_table::Migration),
            Box::new(m20260801_000003_create_document_tags_table::Migration),
            Box::new(m20260801_000004_create_terms_table::Migration),
            Box::new(m20260801_000005_create_todos_table::Migration),
            Box::new(m20260801_000006_create_documents_table::Migration),
            Box::new(m20260801_000007_create_document_tag_maps_table::Migration),
            Box::new(m20260801_000008_create_document_document_tag_maps_table::Migration),
            Box::new(m20260801_000009_create_term_tag_maps_table::Migration),
            Box::new(m20260801_000010_create_todo_tag_maps_table::Migration),
            Box::new(m20260801_000011_create_free_record_schemes_table::Migration),
        ]
    }
}
