pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use services::{InventoryError, PurchaseCoordinator, RoomInventory, TicketStore};

// Shared state для всего приложения
pub struct AppState {
    pub coordinator: PurchaseCoordinator,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, InventoryError> {
        let room = &config.room;
        let inventory = RoomInventory::with_sold(room.total_rows, room.total_columns, &room.sold_seats)?;
        info!(
            "Room {}x{} ready, {} of {} seats available",
            room.total_rows,
            room.total_columns,
            inventory.available_count(),
            inventory.capacity()
        );

        let coordinator = PurchaseCoordinator::new(
            Arc::new(inventory),
            Arc::new(TicketStore::new()),
            config.seats.row,
            config.seats.column,
            config.price,
        );

        Ok(Arc::new(Self { coordinator, config }))
    }
}

/// Builds the full HTTP router around an already constructed state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Cinema Room API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
