use axum::{
    routing::{get, patch},
    Router,
};

use crate::server::{
    controller::{
        player::{
            create_players, delete_player, get_player, get_players, update_player,
            update_player_status,
        },
        status::get_status,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/player", get(get_players).post(create_players))
        .route(
            "/player/{id}",
            get(get_player).patch(update_player).delete(delete_player),
        )
        .route("/player/{id}/status", patch(update_player_status))
        .route("/status", get(get_status))
}
