//! Reservation Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{LocationId, OrderId};

/// Reservation status (预约状态)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Create reservation payload (`POST /reservations/`)
///
/// `order_id = None` means the guest books without a pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub customer_name: String,
    pub phone: Option<String>,
    pub pax: u8,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub location_id: LocationId,
    pub order_id: Option<OrderId>,
}

/// Pre-ordered item echoed back on a reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemSummary {
    pub title: String,
    pub quantity: u32,
}

/// Reservation entity as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    #[serde(default)]
    pub order_id: Option<OrderId>,
    pub location_id: LocationId,
    pub customer_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub pax: u8,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    /// Daily queue position assigned by the server
    pub queue_number: u32,
    pub status: ReservationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderItemSummary>,
}
