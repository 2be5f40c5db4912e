use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, player::PlayerStatus};

/// A single capacity-limited category whose ceiling would be exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityViolation {
    /// The capacity-limited status being overfilled.
    pub status: PlayerStatus,
    /// Configured maximum for the status.
    pub ceiling: u64,
    /// Persisted count plus incoming players.
    pub attempted: u64,
}

impl std::fmt::Display for CapacityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cannot add more than {} {} players (attempted {})",
            self.ceiling, self.status, self.attempted
        )
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    /// Admission or transition would push one or more statuses past their ceiling.
    ///
    /// Carries every violated category, never just the first one found.
    /// Results in a 400 Bad Request response.
    #[error("{}", join_violations(.0))]
    CapacityExceeded(Vec<CapacityViolation>),
}

fn join_violations(violations: &[CapacityViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
