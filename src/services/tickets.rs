use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use thiserror::Error;

use crate::models::{PurchasedTicket, Ticket};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("ticket store lock is poisoned")]
    Poisoned,
}

/// In-memory ticket ledger. Ids are sequential and start at 1.
#[derive(Debug, Default)]
pub struct TicketStore {
    next_id: AtomicU64,
    tickets: RwLock<BTreeMap<u64, PurchasedTicket>>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self, ticket: Ticket) -> Result<PurchasedTicket, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let purchased = PurchasedTicket {
            id,
            ticket,
            purchased_at: Utc::now(),
        };

        self.tickets
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .insert(id, purchased.clone());

        Ok(purchased)
    }

    pub fn get(&self, id: u64) -> Result<Option<PurchasedTicket>, StoreError> {
        let tickets = self.tickets.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tickets.get(&id).cloned())
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        Ok(self.tickets.read().map_err(|_| StoreError::Poisoned)?.len())
    }

    // Выручка по всем записанным билетам
    pub fn income(&self) -> Result<i64, StoreError> {
        let tickets = self.tickets.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tickets.values().map(|t| t.ticket.price).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Seat;

    #[test]
    fn assigns_sequential_ids() {
        let store = TicketStore::new();

        let first = store.save(Ticket::new(Seat::new(1, 1), 10)).unwrap();
        let second = store.save(Ticket::new(Seat::new(1, 2), 10)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn stored_ticket_can_be_read_back() {
        let store = TicketStore::new();
        let saved = store.save(Ticket::new(Seat::new(3, 5), 100)).unwrap();

        let loaded = store.get(saved.id).unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.ticket.seat(), Seat::new(3, 5));
        assert_eq!(store.get(42).unwrap(), None);
    }

    #[test]
    fn income_sums_prices() {
        let store = TicketStore::new();
        assert_eq!(store.income().unwrap(), 0);

        store.save(Ticket::new(Seat::new(1, 1), 10)).unwrap();
        store.save(Ticket::new(Seat::new(6, 1), 8)).unwrap();

        assert_eq!(store.income().unwrap(), 18);
        assert_eq!(store.count().unwrap(), 2);
    }
}
