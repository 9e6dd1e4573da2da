//! Frontend Models
//!
//! Data structures matching the REST API wire shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Restaurant data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Menu item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: Option<u32>,
    pub is_available: bool,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Display label resolved from the loaded category set. The API may
    /// omit it, and mutations recompute it client-side.
    #[serde(default)]
    pub category: Option<String>,
}

/// Category name -> ordered items, exactly as the public endpoint returns it.
/// The client does no grouping of its own.
pub type TableMenu = BTreeMap<String, Vec<MenuItem>>;

impl MenuItem {
    /// Resolve the display label from the loaded categories. A stale or
    /// absent reference leaves the label unset rather than failing.
    pub fn with_category_label(mut self, categories: &[Category]) -> Self {
        self.category = self
            .category_id
            .and_then(|id| categories.iter().find(|c| c.id == id))
            .map(|c| c.name.clone());
        self
    }

    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("-")
    }

    pub fn description_label(&self) -> &str {
        self.description.as_deref().unwrap_or("-")
    }
}

/// Two-decimal price rendering shared by the admin table and the viewer.
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// Form state for the add/edit menu item form. The picked image file is
/// tracked separately because DOM handles are not `Send`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: Option<u32>,
    pub is_available: bool,
}

impl MenuItemDraft {
    pub fn new() -> Self {
        Self {
            is_available: true,
            ..Self::default()
        }
    }

    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            price: item.price.to_string(),
            category_id: item.category_id,
            is_available: item.is_available,
        }
    }

    /// Required-field check run before any network call.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.name.is_empty() || self.price.is_empty() {
            Some("Name and price are required")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category_id: Option<u32>) -> MenuItem {
        MenuItem {
            id: 7,
            name: "Soup".to_string(),
            description: None,
            price: 4.5,
            category_id,
            is_available: true,
            image_url: None,
            category: None,
        }
    }

    #[test]
    fn category_label_resolves_from_loaded_set() {
        let categories = vec![
            Category { id: 1, name: "Starters".to_string() },
            Category { id: 2, name: "Mains".to_string() },
        ];

        let labeled = item(Some(2)).with_category_label(&categories);
        assert_eq!(labeled.category.as_deref(), Some("Mains"));
        assert_eq!(labeled.category_label(), "Mains");
    }

    #[test]
    fn stale_category_reference_falls_back_to_placeholder() {
        let categories = vec![Category { id: 1, name: "Starters".to_string() }];

        let labeled = item(Some(99)).with_category_label(&categories);
        assert_eq!(labeled.category, None);
        assert_eq!(labeled.category_label(), "-");

        let unlabeled = item(None).with_category_label(&categories);
        assert_eq!(unlabeled.category_label(), "-");
    }

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(4.5), "4.50");
        assert_eq!(format_price(12.0), "12.00");
        assert_eq!(format_price(0.99), "0.99");
    }

    #[test]
    fn draft_requires_name_and_price() {
        let mut draft = MenuItemDraft::new();
        assert_eq!(draft.missing_required(), Some("Name and price are required"));

        draft.name = "Soup".to_string();
        assert_eq!(draft.missing_required(), Some("Name and price are required"));

        draft.price = "4.50".to_string();
        assert_eq!(draft.missing_required(), None);
    }

    #[test]
    fn draft_from_item_carries_all_fields() {
        let source = MenuItem {
            description: Some("Tomato soup".to_string()),
            ..item(Some(1))
        };

        let draft = MenuItemDraft::from_item(&source);
        assert_eq!(draft.name, "Soup");
        assert_eq!(draft.description, "Tomato soup");
        assert_eq!(draft.price, "4.5");
        assert_eq!(draft.category_id, Some(1));
        assert!(draft.is_available);
    }

    #[test]
    fn table_menu_decodes_grouped_response() {
        let raw = r#"{"Starters": [{"id":1,"name":"Soup","price":4.5,"is_available":true}]}"#;
        let menu: TableMenu = serde_json::from_str(raw).expect("decode failed");

        assert_eq!(menu.len(), 1);
        let starters = &menu["Starters"];
        assert_eq!(starters.len(), 1);
        assert_eq!(starters[0].name, "Soup");
        assert_eq!(format_price(starters[0].price), "4.50");
        assert!(starters[0].is_available);
        assert_eq!(starters[0].description, None);
    }

    #[test]
    fn empty_table_menu_decodes_to_empty_mapping() {
        let menu: TableMenu = serde_json::from_str("{}").expect("decode failed");
        assert!(menu.is_empty());
    }
}
