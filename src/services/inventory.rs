//! inventory.rs
//!
//! Хранилище свободных мест одного зала.
//!
//! Набор мест фиксируется при создании и дальше только сокращается, поэтому
//! каждое место хранится как отдельный `AtomicBool`. Продажа места сводится к
//! одному `compare_exchange`: из гонки покупателей за одно место выигрывает
//! ровно один, а покупки разных мест друг друга не блокируют.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

use crate::models::{RoomInfo, Seat};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("seat ({0}) is not available")]
    NotFound(Seat),

    #[error("seat ({seat}) is outside of a {total_rows}x{total_columns} room")]
    OutsideRoom {
        seat: Seat,
        total_rows: i32,
        total_columns: i32,
    },
}

#[derive(Debug)]
pub struct RoomInventory {
    total_rows: i32,
    total_columns: i32,
    // true = место свободно
    seats: BTreeMap<Seat, AtomicBool>,
}

impl RoomInventory {
    /// Creates a room where every seat from `1..=total_rows` × `1..=total_columns`
    /// is available.
    pub fn new(total_rows: i32, total_columns: i32) -> Self {
        let seats = (1..=total_rows)
            .flat_map(|row| (1..=total_columns).map(move |column| Seat::new(row, column)))
            .map(|seat| (seat, AtomicBool::new(true)))
            .collect();

        Self { total_rows, total_columns, seats }
    }

    /// Creates a room with the given seats already sold.
    pub fn with_sold(
        total_rows: i32,
        total_columns: i32,
        sold: &[Seat],
    ) -> Result<Self, InventoryError> {
        let inventory = Self::new(total_rows, total_columns);
        for seat in sold {
            if !inventory.seats.contains_key(seat) {
                return Err(InventoryError::OutsideRoom {
                    seat: *seat,
                    total_rows,
                    total_columns,
                });
            }
            // повтор в списке проданных не ошибка
            let _ = inventory.remove_seat(seat);
        }
        Ok(inventory)
    }

    pub fn total_rows(&self) -> i32 {
        self.total_rows
    }

    pub fn total_columns(&self) -> i32 {
        self.total_columns
    }

    /// Number of seats the room was built with, sold or not.
    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    pub fn available_count(&self) -> usize {
        self.seats
            .values()
            .filter(|available| available.load(Ordering::Acquire))
            .count()
    }

    /// Dimensions plus the seats still for sale, ordered by row then column.
    ///
    /// Each seat is read atomically, but the snapshot as a whole is not taken
    /// under a lock: a purchase running concurrently may or may not be reflected.
    pub fn snapshot(&self) -> RoomInfo {
        let seats = self
            .seats
            .iter()
            .filter(|(_, available)| available.load(Ordering::Acquire))
            .map(|(seat, _)| *seat)
            .collect();

        RoomInfo {
            total_rows: self.total_rows,
            total_columns: self.total_columns,
            seats,
        }
    }

    pub fn is_available(&self, seat: &Seat) -> bool {
        self.seats
            .get(seat)
            .is_some_and(|available| available.load(Ordering::Acquire))
    }

    /// Atomically marks `seat` as sold.
    ///
    /// Returns `NotFound` if the seat was already sold (possibly by a concurrent
    /// caller) or never existed in this room.
    pub fn remove_seat(&self, seat: &Seat) -> Result<(), InventoryError> {
        let available = self.seats.get(seat).ok_or(InventoryError::NotFound(*seat))?;

        available
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| InventoryError::NotFound(*seat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn new_room_has_every_seat_available() {
        let inventory = RoomInventory::new(3, 4);
        let info = inventory.snapshot();

        assert_eq!(info.total_rows, 3);
        assert_eq!(info.total_columns, 4);
        assert_eq!(info.seats.len(), 12);
        assert_eq!(info.seats.first(), Some(&Seat::new(1, 1)));
        assert_eq!(info.seats.last(), Some(&Seat::new(3, 4)));
        assert_eq!(inventory.capacity(), 12);
        assert_eq!(inventory.available_count(), 12);
    }

    #[test]
    fn seats_outside_dimensions_do_not_exist() {
        let inventory = RoomInventory::new(2, 2);

        assert!(!inventory.is_available(&Seat::new(0, 1)));
        assert!(!inventory.is_available(&Seat::new(3, 1)));
        assert!(!inventory.is_available(&Seat::new(1, 3)));
        assert_eq!(
            inventory.remove_seat(&Seat::new(3, 3)),
            Err(InventoryError::NotFound(Seat::new(3, 3)))
        );
    }

    #[test]
    fn removed_seat_disappears_from_snapshot() {
        let inventory = RoomInventory::new(2, 2);
        let seat = Seat::new(1, 2);

        inventory.remove_seat(&seat).unwrap();

        assert!(!inventory.is_available(&seat));
        assert!(!inventory.snapshot().seats.contains(&seat));
        assert_eq!(inventory.available_count(), 3);
        assert_eq!(inventory.capacity(), 4);
    }

    #[test]
    fn second_removal_fails() {
        let inventory = RoomInventory::new(1, 1);
        let seat = Seat::new(1, 1);

        assert!(inventory.remove_seat(&seat).is_ok());
        assert_eq!(inventory.remove_seat(&seat), Err(InventoryError::NotFound(seat)));
    }

    #[test]
    fn snapshot_is_stable_without_sales() {
        let inventory = RoomInventory::new(4, 4);
        inventory.remove_seat(&Seat::new(2, 2)).unwrap();

        assert_eq!(inventory.snapshot(), inventory.snapshot());
    }

    #[test]
    fn with_sold_marks_seats_unavailable() {
        let sold = [Seat::new(1, 1), Seat::new(2, 3), Seat::new(1, 1)];
        let inventory = RoomInventory::with_sold(2, 3, &sold).unwrap();

        assert!(!inventory.is_available(&Seat::new(1, 1)));
        assert!(!inventory.is_available(&Seat::new(2, 3)));
        assert_eq!(inventory.available_count(), 4);
    }

    #[test]
    fn with_sold_rejects_seat_outside_room() {
        let err = RoomInventory::with_sold(2, 2, &[Seat::new(5, 1)]).unwrap_err();
        assert!(matches!(err, InventoryError::OutsideRoom { .. }));
    }

    #[test]
    fn concurrent_removal_has_single_winner() {
        let inventory = Arc::new(RoomInventory::new(1, 1));
        let seat = Seat::new(1, 1);

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let inventory = Arc::clone(&inventory);
                thread::spawn(move || inventory.remove_seat(&seat).is_ok())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(inventory.available_count(), 0);
    }
}
