//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let player = factory::player::create_player(&db).await?;
//!
//!     // Fill a status up to a count
//!     let starters = factory::helpers::create_players_with_status(&db, PlayerStatus::Starter, 11).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let player = factory::player::PlayerFactory::new(&db)
//!     .name("Diego")
//!     .status(PlayerStatus::Preselected)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `player` - Squad players

pub mod helpers;
pub mod player;
