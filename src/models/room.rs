use serde::Serialize;

use super::Seat;

// Ответ GET /room: размеры зала и все ещё не проданные места
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfo {
    pub total_rows: i32,
    pub total_columns: i32,
    pub seats: Vec<Seat>,
}

// Ответ GET /stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesStats {
    pub current_income: i64,
    pub number_of_available_seats: usize,
    pub number_of_purchased_tickets: usize,
}
