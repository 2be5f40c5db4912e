use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::MessageDto,
        player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto, UpdatePlayerStatusDto},
    },
    server::{
        error::AppError,
        model::player::{parse_status_change, CreatePlayerParams, UpdatePlayerParams},
        service::player::PlayerService,
        state::AppState,
    },
};

fn service(state: &AppState) -> PlayerService<'_> {
    PlayerService::new(&state.db, &state.roster_lock, &state.roster_limits)
}

/// Unwraps a JSON body, turning axum's rejection into a 400 with our error shape.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Get every player in the squad.
///
/// # Returns
/// - `200 OK` - All players ordered by ID
/// - `500 Internal Server Error` - Database error
pub async fn get_players(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let players = service(&state).get_all().await?;

    let dtos: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a player by ID.
///
/// # Returns
/// - `200 OK` - Player details
/// - `404 Not Found` - No player with that ID
/// - `500 Internal Server Error` - Database error
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let player = service(&state).get_by_id(player_id).await?;

    match player {
        Some(player) => Ok((StatusCode::OK, Json(player.into_dto()))),
        None => Err(AppError::NotFound("Player not found".to_string())),
    }
}

/// Admit a batch of players.
///
/// Every record is validated before any capacity check; the batch is then admitted
/// as a whole or rejected as a whole.
///
/// # Arguments
/// - `state` - Application state containing the database connection and roster lock
/// - `payload` - Array of player objects
///
/// # Returns
/// - `201 Created` - Inserted players with their assigned IDs
/// - `400 Bad Request` - Malformed JSON, empty batch, invalid fields or a ceiling exceeded
/// - `500 Internal Server Error` - Database error
pub async fn create_players(
    State(state): State<AppState>,
    payload: Result<Json<Vec<CreatePlayerDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload)?;

    let params = CreatePlayerParams::from_dto_batch(payload)?;

    let players = service(&state).create_batch(params).await?;

    let dtos: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::CREATED, Json(dtos)))
}

/// Partially update a player.
///
/// A status in the body re-checks the capacity of the destination status.
///
/// # Returns
/// - `200 OK` - Updated player
/// - `400 Bad Request` - Empty body, invalid fields or a ceiling exceeded
/// - `404 Not Found` - No player with that ID
/// - `500 Internal Server Error` - Database error
pub async fn update_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
    payload: Result<Json<UpdatePlayerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload)?;

    let params = UpdatePlayerParams::from_dto(player_id, payload)?;

    let player = service(&state).update(params).await?;

    match player {
        Some(player) => Ok((StatusCode::OK, Json(player.into_dto()))),
        None => Err(AppError::NotFound("Player not found".to_string())),
    }
}

/// Change a player's status.
///
/// # Returns
/// - `200 OK` - Updated player
/// - `400 Bad Request` - Missing or unknown `estado`, or a ceiling exceeded
/// - `404 Not Found` - No player with that ID
/// - `500 Internal Server Error` - Database error
pub async fn update_player_status(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
    payload: Result<Json<UpdatePlayerStatusDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = json_body(payload)?;

    let status = parse_status_change(payload.estado)?;

    let player = service(&state).update_status(player_id, status).await?;

    match player {
        Some(player) => Ok((StatusCode::OK, Json(player.into_dto()))),
        None => Err(AppError::NotFound("Player not found".to_string())),
    }
}

/// Delete a player.
///
/// # Returns
/// - `200 OK` - Player deleted
/// - `404 Not Found` - No player with that ID
/// - `500 Internal Server Error` - Database error
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = service(&state).delete(player_id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "Player deleted successfully".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("Player not found".to_string()))
    }
}
