//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Roster lock serializing capacity-sensitive writes
//! - Roster limits loaded from configuration

use sea_orm::DatabaseConnection;

use super::{model::roster::RosterLimits, service::roster::RosterLock};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `RosterLock` holds `Arc`ed mutexes (clones share the locks)
/// - `RosterLimits` is three integers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Per-status admission locks.
    ///
    /// Every clone of the state must share this lock, otherwise concurrent requests
    /// could both pass a capacity check against the same remaining slot.
    pub roster_lock: RosterLock,

    /// Maximum players per capacity-limited status.
    pub roster_limits: RosterLimits,
}

impl AppState {
    /// Creates a new application state with a fresh roster lock.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `roster_limits` - Configured status ceilings
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, roster_limits: RosterLimits) -> Self {
        Self {
            db,
            roster_lock: RosterLock::new(),
            roster_limits,
        }
    }
}
