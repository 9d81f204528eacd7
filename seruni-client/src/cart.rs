//! Cart projection
//!
//! Turns a server draft order into display lines and keeps an advisory
//! item count for instant feedback before the first fetch resolves.

use std::io;
use std::sync::Arc;

use shared::models::{DraftOrder, MenuItemId};

use crate::storage::SessionStorage;

/// Storage key of the cached cart count
pub const CART_COUNT_KEY: &str = "cart_count";

/// Display-ready cart line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub menu_item_id: MenuItemId,
    pub title: String,
    pub quantity: u32,
    /// Line total in IDR, when the server reports prices
    pub subtotal: Option<i64>,
}

/// Projection of a draft order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total_count: u32,
}

/// Project a draft order into cart lines, keeping server order
///
/// Lines with a non-positive quantity are never emitted.
pub fn project(draft: &DraftOrder) -> CartView {
    let lines: Vec<CartLine> = draft
        .items
        .iter()
        .filter(|item| item.quantity > 0)
        .map(|item| CartLine {
            menu_item_id: item.menu_item_id,
            title: item.title.clone(),
            quantity: item.quantity,
            subtotal: item
                .subtotal
                .or_else(|| item.price.map(|p| p * i64::from(item.quantity))),
        })
        .collect();
    let total_count = lines.iter().map(|l| l.quantity).sum();

    CartView { lines, total_count }
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// One-line summary for the order picker, e.g. `"Ayam ×2, Es Teh ×1"`
    pub fn summary(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{} ×{}", l.title, l.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Sum of line totals, `None` if any line lacks a price
    pub fn total_price(&self) -> Option<i64> {
        self.lines.iter().map(|l| l.subtotal).sum()
    }

    pub fn line(&self, menu_item_id: MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.menu_item_id == menu_item_id)
    }
}

/// Advisory item count shown before the authoritative fetch resolves
///
/// Never used to decide anything; reservation logic always refetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayCount(pub u32);

impl DisplayCount {
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Cached cart counter backed by session storage
#[derive(Clone)]
pub struct DisplayCounter {
    storage: Arc<dyn SessionStorage>,
}

impl DisplayCounter {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    pub fn cache_count(&self, count: u32) -> io::Result<()> {
        self.storage.set(CART_COUNT_KEY, &count.to_string())
    }

    /// Cached count, zero when absent or unreadable
    pub fn read_cached_count(&self) -> DisplayCount {
        self.storage
            .get(CART_COUNT_KEY)
            .and_then(|v| v.trim().parse().ok())
            .map(DisplayCount)
            .unwrap_or_default()
    }

    pub fn reset(&self) -> io::Result<()> {
        self.storage.remove(CART_COUNT_KEY)
    }
}

impl std::fmt::Debug for DisplayCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayCounter")
            .field("cached", &self.read_cached_count())
            .finish()
    }
}
