// seruni-client/examples/storefront.rs
// Storefront walkthrough against a running API
//
// Usage: cargo run --example storefront -- [menu_item_id...]
//        cargo run --example storefront -- --book <location_id> <YYYY-MM-DD> <HH:MM> <pax> <name> [menu_item_id...]

use std::sync::Arc;

use anyhow::Context;
use seruni_client::storefront::{format_idr, refresh_statuses, sort_events};
use seruni_client::{
    ClientConfig, DraftOrderClient, ReservationFlow, ReservationForm, SessionError,
    SessionStorage, StorefrontClient, WhatsAppHandoff,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    seruni_client::logger::init_logger();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Using API");

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let booking = if args.first().map(String::as_str) == Some("--book") {
        if args.len() < 6 {
            println!("Usage: storefront --book <location_id> <YYYY-MM-DD> <HH:MM> <pax> <name> [menu_item_id...]");
            return Ok(());
        }
        let rest = args.split_off(6);
        let form = ReservationForm {
            location_id: args[1].clone(),
            reservation_date: args[2].clone(),
            reservation_time: args[3].clone(),
            pax: args[4].clone(),
            customer_name: args[5].clone(),
            phone: String::new(),
        };
        args = rest;
        Some(form)
    } else {
        None
    };
    let menu_item_ids = args
        .iter()
        .map(|a| a.parse::<i64>().with_context(|| format!("invalid menu item id: {a}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    // Catalog
    let storefront = StorefrontClient::new(config.build_http_client()?);
    let menu = storefront.list_menu().await?;
    for (category, items) in &menu {
        println!("== {category} ==");
        for item in items {
            println!("  [{}] {} {}", item.id, item.title, format_idr(item.price));
        }
    }

    let locations = storefront.list_locations().await?;
    println!("\n== Locations ==");
    for location in &locations {
        println!("  [{}] {}", location.id, location.picker_label());
    }

    let mut events = storefront.list_events().await?;
    refresh_statuses(&mut events, chrono::Local::now().date_naive());
    sort_events(&mut events);
    if let Some(next) = events.first() {
        println!("\nEvent: {} ({} - {})", next.title, next.start_date, next.end_date);
    }

    // Cart
    let storage: Arc<dyn SessionStorage> = Arc::new(config.build_storage());
    let mut drafts = DraftOrderClient::new(config.build_http_client()?, storage);
    println!(
        "\nCart badge (cached): {}",
        drafts.display_counter().read_cached_count().get()
    );

    let ensured = drafts.ensure_draft().await?;
    if ensured.is_reset() {
        println!("Your previous cart expired and was reset.");
    }

    for menu_item_id in menu_item_ids {
        if let Err(e) = drafts.add_item(ensured.order_id, menu_item_id).await {
            println!("Could not add {menu_item_id}: {}", e.user_message());
        }
    }

    let cart = drafts.refresh_cart().await?;
    println!("Order #{}: {}", ensured.order_id, cart.summary());
    if let Some(total) = cart.total_price() {
        println!("Total: {}", format_idr(total));
    }

    // Reservation
    let Some(form) = booking else {
        return Ok(());
    };

    let handoff = WhatsAppHandoff::new(|url: &reqwest::Url| println!("\nOpen: {url}"));
    let mut flow = ReservationFlow::new(handoff, config.restaurant_name.clone());

    if let Err(e) = flow.submit(&form) {
        println!("{}", e.user_message());
        return Ok(());
    }

    match flow.confirm(&mut drafts, &locations).await {
        Ok(receipt) => println!("Queue number: {}", receipt.reservation.queue_number),
        Err(SessionError::HandoffMissingPhone { queue_number, .. }) => {
            println!("Reserved (queue number {queue_number}), but this location has no WhatsApp number.");
        }
        Err(e) => println!("Reservation failed: {}", e.user_message()),
    }

    Ok(())
}
