//! Data models exchanged with the restaurant API

pub mod event;
pub mod location;
pub mod menu;
pub mod order;
pub mod reservation;

/// Server-assigned identifiers
pub type OrderId = i64;
pub type MenuItemId = i64;
pub type LocationId = i64;

pub use event::{Event, EventStatus};
pub use location::Location;
pub use menu::{MenuCatalog, MenuItem};
pub use order::{DraftBootstrap, DraftOrder, DraftOrderItem};
pub use reservation::{OrderItemSummary, Reservation, ReservationCreate, ReservationStatus};
