pub mod room;
pub mod seat;
pub mod ticket;

pub use room::{RoomInfo, SalesStats};
pub use seat::Seat;
pub use ticket::{PurchasedTicket, Ticket};
