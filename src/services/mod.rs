pub mod inventory;
pub mod purchase;
pub mod tickets;

pub use inventory::{InventoryError, RoomInventory};
pub use purchase::{PurchaseCoordinator, PurchaseError};
pub use tickets::{StoreError, TicketStore};
