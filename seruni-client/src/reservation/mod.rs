//! Reservation submission
//!
//! Booking form validation, the submit/confirm state machine and the
//! messaging hand-off that follows a successful booking.

mod flow;
mod form;
mod handoff;

pub use flow::{ReservationFlow, ReservationReceipt, ReservationState};
pub use form::{
    MAX_NAME_LEN, MAX_PAX, MAX_PHONE_LEN, MIN_NAME_LEN, MIN_PAX, ReservationDetails,
    ReservationForm, reservation_slots,
};
pub use handoff::{MessageHandoff, WhatsAppHandoff, format_summary, whatsapp_link};
