use sea_orm_migration::prelude::*;

use super::m20261018_000001_create_player_table::Player;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Capacity checks count players per status on every admission
        manager
            .create_index(
                Index::create()
                    .name("idx_player_status")
                    .table(Player::Table)
                    .col(Player::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_player_status")
                    .table(Player::Table)
                    .to_owned(),
            )
            .await
    }
}
