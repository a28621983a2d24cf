//! Schema migrations. Written against the sea-query builder so the same
//! migration set runs on PostgreSQL and SQLite.

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_catalog_tables;
mod m20250101_000002_create_commerce_tables;
mod m20250101_000003_create_content_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_catalog_tables::Migration),
            Box::new(m20250101_000002_create_commerce_tables::Migration),
            Box::new(m20250101_000003_create_content_tables::Migration),
        ]
    }
}
