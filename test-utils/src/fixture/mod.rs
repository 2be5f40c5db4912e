//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of conversion logic and as default values for factories.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let player = fixture::player::entity();
//! let injured = fixture::player::entity_builder().status(PlayerStatus::Injured).build();
//! ```

pub mod player;
