use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::RoomInfo;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/room", get(get_room))
}

// GET /room
async fn get_room(State(state): State<Arc<AppState>>) -> Json<RoomInfo> {
    Json(state.coordinator.room_info())
}
