// seruni-client/tests/storefront.rs
// Catalog listings against the in-process API

mod common;

use chrono::NaiveDate;
use common::{DARMO, FakeBackend, GUBENG};
use seruni_client::storefront::{
    format_idr, refresh_statuses, search_events, sort_by_distance, sort_events,
};
use seruni_client::{ClientError, EventStatus, HttpClient, StorefrontClient};

#[tokio::test]
async fn test_list_menu_grouped() {
    let backend = FakeBackend::new();
    let storefront = StorefrontClient::new(backend.client());

    let menu = storefront.list_menu().await.unwrap();
    let categories: Vec<&str> = menu.keys().map(String::as_str).collect();
    assert_eq!(categories, vec!["Makanan", "Minuman"]);

    let ayam = &menu["Makanan"][0];
    assert_eq!(ayam.title, "Ayam");
    assert_eq!(format_idr(ayam.price), "Rp 32.000");
    assert_eq!(menu["Minuman"][0].title, "Es Teh Manis");
}

#[tokio::test]
async fn test_locations_nearest_first() {
    let backend = FakeBackend::new();
    let storefront = StorefrontClient::new(backend.client());

    let locations = storefront.list_locations().await.unwrap();
    assert_eq!(locations.len(), 2);

    // Standing next to Gubeng
    let nearby = sort_by_distance(locations, (-7.2650, 112.7520));
    assert_eq!(nearby[0].location.id, GUBENG);
    assert_eq!(nearby[1].location.id, DARMO);
    assert!(nearby[0].distance_km.unwrap() < 1.0);
    assert!(nearby[0].label().unwrap().ends_with("m from you)"));
    assert!(nearby[1].label().unwrap().ends_with("km from you)"));
    assert!(
        nearby[1]
            .picker_entry()
            .starts_with("Seruni Darmo — Seruni Darmo (")
    );
}

#[tokio::test]
async fn test_events_sorted_and_searched() {
    let backend = FakeBackend::new();
    let storefront = StorefrontClient::new(backend.client());

    let mut events = storefront.list_events().await.unwrap();
    let fetched: Vec<EventStatus> = events.iter().map(|e| e.status).collect();
    refresh_statuses(&mut events, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    let refreshed: Vec<EventStatus> = events.iter().map(|e| e.status).collect();
    assert_eq!(fetched, refreshed);

    // A month later the sambal festival is running and the music has ended
    let mut later = events.clone();
    refresh_statuses(&mut later, NaiveDate::from_ymd_opt(2026, 11, 11).unwrap());
    sort_events(&mut later);
    assert_eq!(later[0].title, "Festival Sambal");
    assert_eq!(later[0].status, EventStatus::Ongoing);

    sort_events(&mut events);
    let statuses: Vec<EventStatus> = events.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        vec![EventStatus::Ongoing, EventStatus::Upcoming, EventStatus::Past]
    );

    let found = search_events(&events, "sabtu");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Live Music");
    assert!(search_events(&events, "sambal")[0].description.is_none());
}

#[tokio::test]
async fn test_events_by_status() {
    let backend = FakeBackend::new();
    let storefront = StorefrontClient::new(backend.client());

    let upcoming = storefront
        .list_events_by_status(EventStatus::Upcoming)
        .await
        .unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].title, "Festival Sambal");
}

#[tokio::test]
async fn test_unknown_route_is_rejection() {
    let backend = FakeBackend::new();
    let storefront = StorefrontClient::new(backend.client());

    let result: Result<serde_json::Value, ClientError> =
        storefront.http().get("/no-such-page/", None).await;
    let err = result.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
    assert!(err.is_rejection());
}
