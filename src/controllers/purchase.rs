use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::{PurchasedTicket, Seat};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/purchase", post(purchase_ticket))
}

// POST /purchase
#[derive(Debug, Deserialize)]
struct PurchaseRequest {
    pub row: i32,
    pub column: i32,
}

async fn purchase_ticket(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PurchaseRequest>,
) -> ApiResult<Json<PurchasedTicket>> {
    let ticket = state.coordinator.purchase(Seat::new(req.row, req.column))?;
    Ok(Json(ticket))
}
