pub mod purchase;
pub mod room;
pub mod stats;
pub mod tickets;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(room::routes())
        .merge(purchase::routes())
        .merge(tickets::routes())
        .merge(stats::routes())
}
