//! Location Model

use serde::{Deserialize, Serialize};

use super::LocationId;

/// Restaurant branch (门店)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub maps_url: Option<String>,
}

impl Location {
    /// Phone number reduced to digits, as used by wa.me links
    ///
    /// Returns `None` when the location has no usable number.
    pub fn contact_digits(&self) -> Option<String> {
        let digits: String = self
            .phone_number
            .as_deref()?
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        (!digits.is_empty()).then_some(digits)
    }

    /// Label used by the location picker: name plus first address segment
    pub fn picker_label(&self) -> String {
        let street = self.address.split(',').next().unwrap_or_default().trim();
        format!("{} — {}", self.name, street)
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.lat?, self.lng?))
    }
}
