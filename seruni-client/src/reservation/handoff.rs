// seruni-client/src/reservation/handoff.rs
// Reservation summary and messaging hand-off

use reqwest::Url;
use shared::models::{DraftOrderItem, Reservation};

use crate::error::ClientError;

/// Receives the formatted reservation summary once a booking succeeds
pub trait MessageHandoff: Send + Sync {
    /// `phone` is digits only
    fn hand_off(&self, phone: &str, message: &str);
}

/// Build the summary message sent to the location
///
/// `items` is the draft as captured when the visitor confirmed.
pub fn format_summary(
    restaurant_name: &str,
    reservation: &Reservation,
    items: &[DraftOrderItem],
) -> String {
    let items_text = if items.is_empty() {
        "- (No pre-order)".to_string()
    } else {
        items
            .iter()
            .map(|item| format!("- {} x{}", item.title, item.quantity))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "Halo {restaurant_name}!\n\n\
         *Reservasi Baru*\n\n\
         Nama: {}\n\
         Tanggal: {}\n\
         Jam: {}\n\
         Pax: {}\n\
         No Antrian: {}\n\n\
         Pesanan:\n{items_text}\n\n\
         Terima kasih 🙏",
        reservation.customer_name,
        reservation.reservation_date.format("%Y-%m-%d"),
        reservation.reservation_time.format("%H:%M"),
        reservation.pax,
        reservation.queue_number,
    )
}

/// `https://wa.me/<phone>?text=<message>`
pub fn whatsapp_link(phone: &str, message: &str) -> Result<Url, ClientError> {
    Url::parse_with_params(&format!("https://wa.me/{phone}"), &[("text", message)])
        .map_err(|e| ClientError::Internal(format!("Invalid WhatsApp link: {}", e)))
}

/// Hands the message to WhatsApp by opening a pre-filled wa.me link
///
/// Opening the link is left to `open` (browser, webview, terminal print).
pub struct WhatsAppHandoff<F>
where
    F: Fn(&Url) + Send + Sync,
{
    open: F,
}

impl<F> WhatsAppHandoff<F>
where
    F: Fn(&Url) + Send + Sync,
{
    pub fn new(open: F) -> Self {
        Self { open }
    }
}

impl<F> MessageHandoff for WhatsAppHandoff<F>
where
    F: Fn(&Url) + Send + Sync,
{
    fn hand_off(&self, phone: &str, message: &str) {
        match whatsapp_link(phone, message) {
            Ok(url) => {
                tracing::info!(phone, "Opening WhatsApp hand-off");
                (self.open)(&url);
            }
            Err(e) => tracing::error!(phone, error = %e, "Failed to build WhatsApp link"),
        }
    }
}
