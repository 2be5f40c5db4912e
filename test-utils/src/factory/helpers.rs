//! Shared helper utilities for factory methods.

use entity::sea_orm_active_enums::PlayerStatus;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// name to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts `count` players with the given status.
///
/// # Arguments
/// - `db` - Database connection
/// - `status` - Status every created player holds
/// - `count` - Number of players to create
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created players in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_players_with_status(
    db: &DatabaseConnection,
    status: PlayerStatus,
    count: usize,
) -> Result<Vec<entity::player::Model>, DbErr> {
    let mut players = Vec::with_capacity(count);

    for _ in 0..count {
        players.push(
            crate::factory::player::PlayerFactory::new(db)
                .status(status)
                .build()
                .await?,
        );
    }

    Ok(players)
}
