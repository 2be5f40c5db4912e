use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::ServerStatusDto;

/// Liveness probe.
///
/// # Returns
/// - `200 OK` - Server is accepting requests
pub async fn get_status() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ServerStatusDto {
            status: "success".to_string(),
            message: "Server is running".to_string(),
        }),
    )
}
