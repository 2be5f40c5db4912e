//! Player factory for creating test player entities.

use crate::{factory::helpers::next_id, fixture};
use entity::sea_orm_active_enums::{PlayerStatus, Position};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .name("Diego")
///     .status(PlayerStatus::Substitute)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    surname: String,
    status: PlayerStatus,
    natural_position: Position,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Player {id}"` where id is auto-incremented
    /// - surname: `"Surname {id}"`
    /// - status: `Starter`
    /// - natural_position: `CM`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Player {}", id),
            surname: format!("Surname {}", id),
            status: fixture::player::DEFAULT_STATUS,
            natural_position: fixture::player::DEFAULT_POSITION,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    pub fn status(mut self, status: PlayerStatus) -> Self {
        self.status = status;
        self
    }

    pub fn natural_position(mut self, position: Position) -> Self {
        self.natural_position = position;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let model = fixture::player::entity_builder()
            .name(self.name)
            .surname(self.surname)
            .status(self.status)
            .natural_position(self.natural_position)
            .build();

        let mut active: entity::player::ActiveModel = model.into();
        active.id = ActiveValue::NotSet;

        active.insert(self.db).await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

/// Creates a player holding `status`.
pub async fn create_player_with_status(
    db: &DatabaseConnection,
    status: PlayerStatus,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).status(status).build().await
}
