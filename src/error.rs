use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::PurchaseError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Purchase(#[from] PurchaseError),

    #[error("ticket {0} not found")]
    TicketNotFound(u64),
}

#[derive(Serialize)]
pub struct ApiError {
    success: bool,
    message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Purchase(PurchaseError::SeatOutOfBounds(_)) => StatusCode::BAD_REQUEST,
            AppError::Purchase(PurchaseError::AlreadySold(_)) => StatusCode::CONFLICT,
            AppError::Purchase(PurchaseError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TicketNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ApiError { success: false, message })).into_response()
    }
}

pub type ApiResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Seat;
    use crate::services::StoreError;

    #[test]
    fn maps_domain_errors_to_status_codes() {
        let seat = Seat::new(1, 1);
        assert_eq!(AppError::from(PurchaseError::SeatOutOfBounds(seat)).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::from(PurchaseError::AlreadySold(seat)).status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::from(PurchaseError::Store(StoreError::Poisoned)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::TicketNotFound(7).status(), StatusCode::NOT_FOUND);
    }
}
