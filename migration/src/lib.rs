pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_player_table;
mod m20261018_000002_add_player_status_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_player_table::Migration),
            Box::new(m20261018_000002_add_player_status_index::Migration),
        ]
    }
}
