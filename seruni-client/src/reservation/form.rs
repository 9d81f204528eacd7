// seruni-client/src/reservation/form.rs
// Booking form validation

use chrono::{NaiveDate, NaiveTime, Timelike};
use shared::ErrorCode;
use shared::models::{LocationId, OrderId, ReservationCreate};

use crate::error::{SessionError, SessionResult};

// ── Field limits ────────────────────────────────────────────────────

pub const MIN_PAX: u8 = 1;
pub const MAX_PAX: u8 = 20;

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 100;

pub const MAX_PHONE_LEN: usize = 20;

/// First and last bookable slot
pub const FIRST_SLOT_HOUR: u32 = 9;
pub const LAST_SLOT_HOUR: u32 = 20;

/// Bookable reservation times: every 30 minutes from 09:00 to 20:00
pub fn reservation_slots() -> Vec<NaiveTime> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .flat_map(|hour| [0, 30].map(move |minute| (hour, minute)))
        .filter(|&(hour, minute)| !(hour == LAST_SLOT_HOUR && minute == 30))
        .filter_map(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .collect()
}

fn is_slot(time: NaiveTime) -> bool {
    time.second() == 0
        && matches!(time.minute(), 0 | 30)
        && (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).contains(&time.hour())
        && !(time.hour() == LAST_SLOT_HOUR && time.minute() == 30)
}

/// Raw booking form input, exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub customer_name: String,
    pub phone: String,
    pub pax: String,
    /// `YYYY-MM-DD`
    pub reservation_date: String,
    /// `HH:MM`
    pub reservation_time: String,
    pub location_id: String,
}

/// Validated booking details, waiting for the pre-order to be attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDetails {
    pub customer_name: String,
    pub phone: Option<String>,
    pub pax: u8,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub location_id: LocationId,
}

impl ReservationForm {
    /// Validate every field; nothing here touches the network
    pub fn validate(&self) -> SessionResult<ReservationDetails> {
        let name = self.customer_name.trim();
        let phone = self.phone.trim();
        let pax = self.pax.trim();
        let date = self.reservation_date.trim();
        let time = self.reservation_time.trim();
        let location = self.location_id.trim();

        for (field, value) in [
            ("reservation_date", date),
            ("reservation_time", time),
            ("customer_name", name),
            ("pax", pax),
            ("location_id", location),
        ] {
            if value.is_empty() {
                return Err(SessionError::validation(
                    field,
                    ErrorCode::RequiredField.message(),
                ));
            }
        }

        let pax: i64 = pax
            .parse()
            .map_err(|_| SessionError::validation("pax", "Pax must be a number"))?;
        if !(i64::from(MIN_PAX)..=i64::from(MAX_PAX)).contains(&pax) {
            return Err(SessionError::validation(
                "pax",
                format!("Pax must be between {MIN_PAX} and {MAX_PAX}"),
            ));
        }

        let name_len = name.chars().count();
        if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&name_len) {
            return Err(SessionError::validation(
                "customer_name",
                format!("Name must be {MIN_NAME_LEN} to {MAX_NAME_LEN} characters"),
            ));
        }

        if phone.chars().count() > MAX_PHONE_LEN {
            return Err(SessionError::validation(
                "phone",
                format!("Phone number is too long (max {MAX_PHONE_LEN})"),
            ));
        }

        let reservation_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| SessionError::validation("reservation_date", "Invalid reservation date"))?;

        let reservation_time = NaiveTime::parse_from_str(time, "%H:%M")
            .map_err(|_| SessionError::validation("reservation_time", "Invalid reservation time"))?;
        if !is_slot(reservation_time) {
            return Err(SessionError::validation(
                "reservation_time",
                "Reservation time must be a 30-minute slot between 09:00 and 20:00",
            ));
        }

        let location_id: LocationId = location
            .parse()
            .map_err(|_| SessionError::validation("location_id", "Please select a location"))?;

        Ok(ReservationDetails {
            customer_name: name.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            pax: pax as u8,
            reservation_date,
            reservation_time,
            location_id,
        })
    }
}

impl ReservationDetails {
    /// Build the create payload; `None` books without a pre-order
    pub fn to_request(&self, order_id: Option<OrderId>) -> ReservationCreate {
        ReservationCreate {
            customer_name: self.customer_name.clone(),
            phone: self.phone.clone(),
            pax: self.pax,
            reservation_date: self.reservation_date,
            reservation_time: self.reservation_time,
            location_id: self.location_id,
            order_id,
        }
    }
}
