//! purchase.rs
//!
//! Покупка билета: проверка границ, проверка доступности, расчёт цены,
//! списание места и запись билета. Операция либо выполняется целиком,
//! либо возвращает ошибку без побочных эффектов.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{PriceRangeConfig, SeatRangeConfig};
use crate::models::{PurchasedTicket, RoomInfo, SalesStats, Seat, Ticket};
use crate::services::inventory::{InventoryError, RoomInventory};
use crate::services::tickets::{StoreError, TicketStore};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("the number of a row or a column is out of bounds")]
    SeatOutOfBounds(Seat),

    #[error("the ticket has been already purchased")]
    AlreadySold(Seat),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<InventoryError> for PurchaseError {
    fn from(err: InventoryError) -> Self {
        match err {
            // проигранная гонка за место
            InventoryError::NotFound(seat) => PurchaseError::AlreadySold(seat),
            InventoryError::OutsideRoom { seat, .. } => PurchaseError::SeatOutOfBounds(seat),
        }
    }
}

pub struct PurchaseCoordinator {
    inventory: Arc<RoomInventory>,
    tickets: Arc<TicketStore>,
    row_range: SeatRangeConfig,
    column_range: SeatRangeConfig,
    price: PriceRangeConfig,
}

impl PurchaseCoordinator {
    pub fn new(
        inventory: Arc<RoomInventory>,
        tickets: Arc<TicketStore>,
        row_range: SeatRangeConfig,
        column_range: SeatRangeConfig,
        price: PriceRangeConfig,
    ) -> Self {
        Self { inventory, tickets, row_range, column_range, price }
    }

    pub fn room_info(&self) -> RoomInfo {
        self.inventory.snapshot()
    }

    pub fn purchase(&self, seat: Seat) -> Result<PurchasedTicket, PurchaseError> {
        if !self.in_bounds(&seat) {
            warn!("Rejected purchase of seat ({}): out of bounds", seat);
            return Err(PurchaseError::SeatOutOfBounds(seat));
        }

        if !self.inventory.is_available(&seat) {
            warn!("Rejected purchase of seat ({}): already sold", seat);
            return Err(PurchaseError::AlreadySold(seat));
        }

        let price = self.price.price_for(&seat);

        // проверка выше только отсекает заведомо проданные места,
        // гонку решает remove_seat
        self.inventory.remove_seat(&seat).inspect_err(|_| {
            warn!("Rejected purchase of seat ({}): sold to a concurrent buyer", seat);
        })?;

        let purchased = self.tickets.save(Ticket::new(seat, price))?;
        info!("🎟️ Ticket {} sold: seat ({}), price {}", purchased.id, seat, price);

        Ok(purchased)
    }

    pub fn ticket(&self, id: u64) -> Result<Option<PurchasedTicket>, PurchaseError> {
        Ok(self.tickets.get(id)?)
    }

    pub fn stats(&self) -> Result<SalesStats, PurchaseError> {
        Ok(SalesStats {
            current_income: self.tickets.income()?,
            number_of_available_seats: self.inventory.available_count(),
            number_of_purchased_tickets: self.tickets.count()?,
        })
    }

    fn in_bounds(&self, seat: &Seat) -> bool {
        self.row_range.contains(seat.row) && self.column_range.contains(seat.column)
    }
}
