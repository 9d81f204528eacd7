//! Menu Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::MenuItemId;

/// Active menu item as served by `GET /menu/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub title: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// Price in IDR
    pub price: i64,
    #[serde(default)]
    pub image: Option<String>,
}

/// Menu grouped by category name
pub type MenuCatalog = BTreeMap<String, Vec<MenuItem>>;
