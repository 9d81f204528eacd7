//! Draft order session: visitor identity and the server-held cart

mod draft;
mod identity;

pub use draft::{DraftOrderClient, DraftOutcome, EnsuredDraft, QuantityChange};
pub use identity::{SESSION_KEY, VisitorIdentityStore, VisitorSession};
