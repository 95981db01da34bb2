use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Seat;

/// Проданный билет: место и цена, зафиксированная в момент покупки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub row: i32,
    pub column: i32,
    pub price: i64,
}

impl Ticket {
    pub fn new(seat: Seat, price: i64) -> Self {
        Self { row: seat.row, column: seat.column, price }
    }

    pub fn seat(&self) -> Seat {
        Seat::new(self.row, self.column)
    }
}

/// Билет после записи в хранилище, с присвоенным идентификатором.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedTicket {
    pub id: u64,
    #[serde(flatten)]
    pub ticket: Ticket,
    pub purchased_at: DateTime<Utc>,
}
