//! Seruni Client - storefront client for the restaurant API
//!
//! Keeps an anonymous visitor's draft order (cart) in sync with the server,
//! projects it for display, and turns it into a reservation followed by a
//! WhatsApp hand-off to the chosen location.

pub mod cart;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod reservation;
pub mod session;
pub mod storage;
pub mod storefront;

pub use cart::{CartLine, CartView, DisplayCount, DisplayCounter};
pub use client::{HttpClient, NetworkHttpClient, OneshotHttpClient, VISITOR_TOKEN_HEADER};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, SessionError, SessionResult};
pub use reservation::{
    MessageHandoff, ReservationDetails, ReservationFlow, ReservationForm, ReservationReceipt,
    ReservationState, WhatsAppHandoff,
};
pub use session::{
    DraftOrderClient, DraftOutcome, EnsuredDraft, QuantityChange, VisitorIdentityStore,
    VisitorSession,
};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use storefront::StorefrontClient;

// Re-export shared models for convenience
pub use shared::models::{
    DraftOrder, DraftOrderItem, Event, EventStatus, Location, MenuCatalog, MenuItem, Reservation,
    ReservationCreate, ReservationStatus,
};
