// seruni-client/tests/common/mod.rs
// In-process fake of the restaurant API, driven through OneshotHttpClient

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};

use seruni_client::{
    Location, MenuItem, MessageHandoff, OneshotHttpClient, Reservation, ReservationCreate,
    ReservationStatus, VISITOR_TOKEN_HEADER,
};
use shared::models::OrderItemSummary;

pub const AYAM: i64 = 1;
pub const ES_TEH: i64 = 2;
pub const TAHU: i64 = 3;

/// Location with a contact number
pub const DARMO: i64 = 1;
/// Location without a contact number
pub const GUBENG: i64 = 2;

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn reject(status: StatusCode, detail: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "detail": detail })))
}

#[derive(Debug, Clone)]
struct FakeOrder {
    token: String,
    status: &'static str,
    expired: bool,
    /// `(menu_item_id, quantity)` in insertion order
    items: Vec<(i64, u32)>,
}

#[derive(Debug, Default)]
struct BackendState {
    next_order_id: i64,
    orders: HashMap<i64, FakeOrder>,
    menu: Vec<MenuItem>,
    locations: Vec<Location>,
    reservations: Vec<Reservation>,
    queue: HashMap<NaiveDate, u32>,
    reservation_failure: Option<(StatusCode, String)>,
    fetch_failure: Option<(StatusCode, String)>,
    requests: Vec<String>,
}

/// Shared handle on the fake server; clones see the same state
#[derive(Debug, Clone)]
pub struct FakeBackend {
    state: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let state = BackendState {
            next_order_id: 100,
            menu: vec![
                menu_item(AYAM, "Ayam", 32000),
                menu_item(ES_TEH, "Es Teh Manis", 8000),
                menu_item(TAHU, "Tahu Isi", 12000),
            ],
            locations: vec![
                location(DARMO, "Seruni Darmo", Some("+62 812-3456-789"), (-7.2875, 112.7383)),
                location(GUBENG, "Seruni Gubeng", None, (-7.2655, 112.7521)),
            ],
            ..Default::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BackendState> {
        self.state.lock().unwrap()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/orders/draft", post(create_draft))
            .route("/orders/{order_id}", get(get_order))
            .route(
                "/orders/{order_id}/{action}/{menu_item_id}",
                post(mutate_order),
            )
            .route("/reservations/", post(create_reservation))
            .route("/menu/", get(list_menu))
            .route("/locations/", get(list_locations))
            .route("/events/", get(list_events))
            .route("/events/filter", get(filter_events))
            .layer(middleware::from_fn_with_state(self.state.clone(), record))
            .with_state(self.state.clone())
    }

    pub fn client(&self) -> OneshotHttpClient {
        OneshotHttpClient::new(self.router())
    }

    /// Every request seen so far, as `"METHOD /path"`
    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    pub fn count(&self, request: &str) -> usize {
        self.lock().requests.iter().filter(|r| *r == request).count()
    }

    pub fn draft_posts(&self) -> usize {
        self.count("POST /orders/draft")
    }

    pub fn expire_order(&self, order_id: i64) {
        if let Some(order) = self.lock().orders.get_mut(&order_id) {
            order.expired = true;
        }
    }

    pub fn order_status(&self, order_id: i64) -> Option<&'static str> {
        self.lock().orders.get(&order_id).map(|o| o.status)
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.lock().reservations.clone()
    }

    pub fn locations(&self) -> Vec<Location> {
        self.lock().locations.clone()
    }

    /// Make the next reservation create fail with `status`
    pub fn fail_next_reservation(&self, status: StatusCode, detail: &str) {
        self.lock().reservation_failure = Some((status, detail.to_string()));
    }

    /// Make the next order fetch fail with `status`
    pub fn fail_next_fetch(&self, status: StatusCode, detail: &str) {
        self.lock().fetch_failure = Some((status, detail.to_string()));
    }
}

async fn record(
    State(state): State<Arc<Mutex<BackendState>>>,
    request: Request,
    next: Next,
) -> Response {
    let entry = format!("{} {}", request.method(), request.uri().path());
    state.lock().unwrap().requests.push(entry);
    next.run(request).await
}

fn visitor_token(headers: &HeaderMap) -> Result<String, (StatusCode, Json<Value>)> {
    headers
        .get(VISITOR_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .ok_or_else(|| {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "detail": [{
                        "loc": ["header", "x-visitor-token"],
                        "msg": "Field required",
                        "type": "missing"
                    }]
                })),
            )
        })
}

async fn create_draft(State(state): State<Arc<Mutex<BackendState>>>) -> impl IntoResponse {
    let mut state = state.lock().unwrap();
    state.next_order_id += 1;
    let order_id = state.next_order_id;
    let token = format!("tok-{order_id}");
    state.orders.insert(
        order_id,
        FakeOrder {
            token: token.clone(),
            status: "draft",
            expired: false,
            items: Vec::new(),
        },
    );

    (
        StatusCode::CREATED,
        Json(json!({
            "order_id": order_id,
            "visitor_token": token,
            "expires_at": "2026-01-21T13:00:00Z"
        })),
    )
}

async fn get_order(
    State(state): State<Arc<Mutex<BackendState>>>,
    Path(order_id): Path<i64>,
    headers: HeaderMap,
) -> ApiResult {
    let token = visitor_token(&headers)?;
    let mut state = state.lock().unwrap();

    if let Some((status, detail)) = state.fetch_failure.take() {
        return Err(reject(status, &detail));
    }

    let order = state
        .orders
        .get(&order_id)
        .filter(|o| o.token == token && !o.expired)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Order not found"))?;
    if order.status != "draft" {
        return Err(reject(StatusCode::FORBIDDEN, "Order already confirmed"));
    }

    let items: Vec<Value> = order
        .items
        .iter()
        .filter_map(|&(menu_item_id, quantity)| {
            let menu = state.menu.iter().find(|m| m.id == menu_item_id)?;
            Some(json!({
                "menu_item_id": menu_item_id,
                "title": menu.title,
                "price": menu.price,
                "quantity": quantity,
                "subtotal": menu.price * i64::from(quantity)
            }))
        })
        .collect();

    Ok(Json(json!({
        "id": order_id,
        "status": order.status,
        "expires_at": "2026-01-21T13:00:00Z",
        "items": items
    })))
}

async fn mutate_order(
    State(state): State<Arc<Mutex<BackendState>>>,
    Path((order_id, action, menu_item_id)): Path<(i64, String, i64)>,
    headers: HeaderMap,
) -> ApiResult {
    let token = visitor_token(&headers)?;
    let mut state = state.lock().unwrap();

    if !state.menu.iter().any(|m| m.id == menu_item_id) {
        return Err(reject(StatusCode::NOT_FOUND, "Menu item not found"));
    }

    let order = state
        .orders
        .get_mut(&order_id)
        .filter(|o| o.token == token && !o.expired && o.status == "draft")
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Draft order not found or expired"))?;
    let line = order.items.iter().position(|(id, _)| *id == menu_item_id);

    let status = match (action.as_str(), line) {
        ("add", Some(i)) | ("inc", Some(i)) => {
            order.items[i].1 += 1;
            if action == "add" { "added" } else { "increased" }
        }
        ("add", None) => {
            order.items.push((menu_item_id, 1));
            "added"
        }
        ("dec", Some(i)) => {
            if order.items[i].1 <= 1 {
                order.items.remove(i);
                "removed"
            } else {
                order.items[i].1 -= 1;
                "decreased"
            }
        }
        ("inc", None) | ("dec", None) => {
            return Err(reject(StatusCode::NOT_FOUND, "Item not found"));
        }
        _ => return Err(reject(StatusCode::NOT_FOUND, "Not Found")),
    };

    Ok(Json(json!({ "status": status })))
}

async fn create_reservation(
    State(state): State<Arc<Mutex<BackendState>>>,
    Json(data): Json<ReservationCreate>,
) -> Result<(StatusCode, Json<Reservation>), (StatusCode, Json<Value>)> {
    let mut state = state.lock().unwrap();

    if let Some((status, detail)) = state.reservation_failure.take() {
        return Err(reject(status, &detail));
    }
    if !(1..=20).contains(&data.pax) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "detail": [{ "loc": ["body", "pax"], "msg": "Input should be less than or equal to 20" }]
            })),
        ));
    }

    let mut order_items = Vec::new();
    if let Some(order_id) = data.order_id {
        let order = state
            .orders
            .get(&order_id)
            .filter(|o| o.status == "draft" && !o.expired)
            .ok_or_else(|| {
                reject(StatusCode::NOT_FOUND, "Active draft order not found or expired")
            })?;
        if state.reservations.iter().any(|r| r.order_id == Some(order_id)) {
            return Err(reject(StatusCode::BAD_REQUEST, "Order already has a reservation"));
        }
        for &(menu_item_id, quantity) in &order.items {
            if let Some(menu) = state.menu.iter().find(|m| m.id == menu_item_id) {
                order_items.push(OrderItemSummary {
                    title: menu.title.clone(),
                    quantity,
                });
            }
        }
    }

    let queue_number = {
        let counter = state.queue.entry(data.reservation_date).or_insert(0);
        *counter += 1;
        *counter
    };
    if let Some(order) = data.order_id.and_then(|id| state.orders.get_mut(&id)) {
        order.status = "confirmed";
    }

    let reservation = Reservation {
        id: state.reservations.len() as i64 + 1,
        order_id: data.order_id,
        location_id: data.location_id,
        customer_name: data.customer_name,
        phone: data.phone,
        pax: data.pax,
        reservation_date: data.reservation_date,
        reservation_time: data.reservation_time,
        queue_number,
        status: ReservationStatus::Pending,
        created_at: Some("2026-01-20T08:00:00Z".into()),
        order_items,
    };
    state.reservations.push(reservation.clone());

    Ok((StatusCode::CREATED, Json(reservation)))
}

async fn list_menu(State(state): State<Arc<Mutex<BackendState>>>) -> Json<Value> {
    let state = state.lock().unwrap();
    Json(json!({
        "Makanan": [&state.menu[0], &state.menu[2]],
        "Minuman": [&state.menu[1]]
    }))
}

async fn list_locations(State(state): State<Arc<Mutex<BackendState>>>) -> Json<Vec<Location>> {
    Json(state.lock().unwrap().locations.clone())
}

fn events() -> Value {
    json!([
        {
            "id": 1, "title": "Promo Ramadan", "description": "Diskon buka puasa",
            "start_date": "2026-02-18", "end_date": "2026-03-19", "status": "past",
            "is_active": true, "is_featured": true
        },
        {
            "id": 2, "title": "Live Music", "description": "Akustik setiap Sabtu",
            "start_date": "2026-10-01", "end_date": "2026-10-31", "status": "ongoing",
            "is_active": true, "is_featured": false
        },
        {
            "id": 3, "title": "Festival Sambal", "description": null,
            "start_date": "2026-11-10", "end_date": "2026-11-12", "status": "upcoming",
            "is_active": true, "is_featured": false
        }
    ])
}

async fn list_events() -> Json<Value> {
    Json(events())
}

#[derive(Deserialize)]
struct EventFilter {
    status: String,
}

async fn filter_events(Query(filter): Query<EventFilter>) -> ApiResult {
    if !["upcoming", "ongoing", "past"].contains(&filter.status.as_str()) {
        return Err(reject(StatusCode::BAD_REQUEST, "Invalid status"));
    }
    let matching: Vec<Value> = events()
        .as_array()
        .into_iter()
        .flatten()
        .filter(|e| e["status"] == filter.status.as_str())
        .cloned()
        .collect();
    Ok(Json(Value::Array(matching)))
}

fn menu_item(id: i64, title: &str, price: i64) -> MenuItem {
    MenuItem {
        id,
        title: title.into(),
        desc: None,
        price,
        image: None,
    }
}

fn location(id: i64, name: &str, phone: Option<&str>, coords: (f64, f64)) -> Location {
    Location {
        id,
        name: name.into(),
        address: format!("{name}, Surabaya"),
        phone_number: phone.map(String::from),
        lat: Some(coords.0),
        lng: Some(coords.1),
        hours: Some("10:00 - 22:00".into()),
        rating: Some(4.6),
        reviews: Some(120),
        image_url: None,
        maps_url: None,
    }
}

/// Messaging collaborator that remembers every hand-off
#[derive(Debug, Clone, Default)]
pub struct RecordingHandoff {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingHandoff {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl MessageHandoff for RecordingHandoff {
    fn hand_off(&self, phone: &str, message: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((phone.to_string(), message.to_string()));
    }
}
