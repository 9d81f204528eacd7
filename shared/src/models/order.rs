//! Draft Order Model

use serde::{Deserialize, Serialize};

use super::{MenuItemId, OrderId};

/// Response of `POST /orders/draft`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftBootstrap {
    pub order_id: OrderId,
    pub visitor_token: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}

/// Server-held cart (草稿订单)
///
/// Items arrive in insertion order and every item has `quantity >= 1`;
/// the server drops an item once it is decremented to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftOrder {
    pub id: OrderId,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub items: Vec<DraftOrderItem>,
}

/// Line of a draft order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftOrderItem {
    pub menu_item_id: MenuItemId,
    pub title: String,
    pub quantity: u32,
    /// Unit price in IDR
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub subtotal: Option<i64>,
}

impl DraftOrder {
    /// Find the line for a menu item
    pub fn item(&self, menu_item_id: MenuItemId) -> Option<&DraftOrderItem> {
        self.items.iter().find(|i| i.menu_item_id == menu_item_id)
    }

    /// Quantity of a menu item, zero when absent
    pub fn quantity_of(&self, menu_item_id: MenuItemId) -> u32 {
        self.item(menu_item_id).map(|i| i.quantity).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(|i| i.quantity == 0)
    }
}
