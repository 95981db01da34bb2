use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::error::{ApiResult, AppError};
use crate::models::PurchasedTicket;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tickets/{id}", get(get_ticket))
}

// GET /tickets/{id}
async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<PurchasedTicket>> {
    state
        .coordinator
        .ticket(id)?
        .map(Json)
        .ok_or(AppError::TicketNotFound(id))
}
