//! Fixture for player test data.
//!
//! Provides in-memory player entity models without database insertion.

use chrono::NaiveDate;
use entity::{
    player,
    sea_orm_active_enums::{PlayerStatus, Position, PreferredFoot},
};
use serde_json::json;

/// Default test player status.
pub const DEFAULT_STATUS: PlayerStatus = PlayerStatus::Starter;

/// Default test player natural position.
pub const DEFAULT_POSITION: Position = Position::CM;

/// Creates a player entity model with default values.
///
/// Returns an in-memory entity without database insertion. Status defaults to
/// `Starter`, position to `CM`, every skill flag is off.
///
/// # Example
/// ```rust,ignore
/// let entity = fixture::player::entity();
/// assert_eq!(entity.status, PlayerStatus::Starter);
/// ```
pub fn entity() -> player::Model {
    entity_builder().build()
}

/// Creates a customizable player entity builder.
///
/// # Example
/// ```rust,ignore
/// let entity = fixture::player::entity_builder()
///     .name("Diego")
///     .status(PlayerStatus::Substitute)
///     .build();
/// ```
pub fn entity_builder() -> PlayerEntityBuilder {
    PlayerEntityBuilder::default()
}

/// Builder for player entity models.
///
/// Creates customizable entity models without database insertion.
pub struct PlayerEntityBuilder {
    id: i32,
    name: String,
    surname: String,
    status: PlayerStatus,
    natural_position: Position,
}

impl Default for PlayerEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Test".to_string(),
            surname: "Player".to_string(),
            status: DEFAULT_STATUS,
            natural_position: DEFAULT_POSITION,
        }
    }
}

impl PlayerEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
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

    /// Builds the entity model.
    pub fn build(self) -> player::Model {
        player::Model {
            id: self.id,
            name: self.name,
            surname: self.surname,
            img: None,
            birth_date: NaiveDate::from_ymd_opt(1995, 3, 14).unwrap_or_default(),
            first_nationality: "Argentina".to_string(),
            second_nationality: None,
            languages: json!(["Spanish"]),
            marital_status: None,
            children: None,
            natural_position: self.natural_position,
            secondary_position: None,
            preferred_foot: Some(PreferredFoot::Right),
            status: self.status,
            height: Some(1.80),
            weight: Some(75.0),
            technical_skills: json!({}),
            physical_skills: json!({}),
            mental_skills: json!({}),
            goalkeeper_skills: json!({}),
            agent: None,
            current_club: None,
            contract_status: None,
            requires_loan_out: None,
            transfer_interest: None,
            priority_signing: None,
        }
    }
}
