//! stats.rs
//!
//! Статистика продаж по залу: выручка, число свободных мест и проданных билетов.

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::SalesStats;
use crate::AppState;

/// Определяет маршруты статистики.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stats", get(get_stats))
}

/// GET /stats
async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<SalesStats>> {
    Ok(Json(state.coordinator.stats()?))
}
