//! Storefront catalog
//!
//! Read-only listings (menu, locations, events) plus the presentation
//! helpers the storefront pages use on them.

mod events;
mod locations;
mod menu;

pub use events::{refresh_statuses, search_events, sort_events};
pub use locations::{NearbyLocation, distance_label, haversine_km, sort_by_distance};
pub use menu::format_idr;

use shared::models::{Event, EventStatus, Location, MenuCatalog};

use crate::client::HttpClient;
use crate::error::ClientResult;

/// Typed access to the public catalog endpoints
///
/// None of these calls need a visitor token.
#[derive(Debug, Clone)]
pub struct StorefrontClient<H: HttpClient> {
    http: H,
}

impl<H: HttpClient> StorefrontClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    // ========== Menu ==========

    /// Active menu items grouped by category
    pub async fn list_menu(&self) -> ClientResult<MenuCatalog> {
        let catalog: MenuCatalog = self.http.get("/menu/", None).await?;
        tracing::debug!(categories = catalog.len(), "Loaded menu");
        Ok(catalog)
    }

    // ========== Locations ==========

    pub async fn list_locations(&self) -> ClientResult<Vec<Location>> {
        let locations: Vec<Location> = self.http.get("/locations/", None).await?;
        tracing::debug!(count = locations.len(), "Loaded locations");
        Ok(locations)
    }

    // ========== Events ==========

    /// Active events, in server order (start date ascending)
    pub async fn list_events(&self) -> ClientResult<Vec<Event>> {
        let events: Vec<Event> = self.http.get("/events/", None).await?;
        tracing::debug!(count = events.len(), "Loaded events");
        Ok(events)
    }

    /// Active events with the given status
    pub async fn list_events_by_status(&self, status: EventStatus) -> ClientResult<Vec<Event>> {
        self.http
            .get(&format!("/events/filter?status={}", status.as_str()), None)
            .await
    }
}
