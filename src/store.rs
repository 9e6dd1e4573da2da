//! Admin State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the admin
//! collections. Collections change only from server-confirmed payloads.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, MenuItem, Restaurant};

/// Admin console state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// All restaurants visible to the admin
    pub restaurants: Vec<Restaurant>,
    /// Currently selected restaurant ID
    pub selected_restaurant: Option<u32>,
    /// Categories of the selected restaurant
    pub categories: Vec<Category>,
    /// Menu items of the selected restaurant
    pub menu_items: Vec<MenuItem>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the restaurant list, selecting the first entry when nothing is
/// selected yet.
pub fn store_set_restaurants(store: &AdminStore, restaurants: Vec<Restaurant>) {
    if store.selected_restaurant().get_untracked().is_none() {
        store.selected_restaurant().set(restaurants.first().map(|r| r.id));
    }
    store.restaurants().set(restaurants);
}

/// Append a server-confirmed restaurant; the first one created into an empty
/// list becomes selected.
pub fn store_add_restaurant(store: &AdminStore, restaurant: Restaurant) {
    if store.selected_restaurant().get_untracked().is_none() {
        store.selected_restaurant().set(Some(restaurant.id));
    }
    store.restaurants().write().push(restaurant);
}

/// Commit point for the joined categories + menu fetch. Callers only reach
/// this once both requests have succeeded.
pub fn store_commit_restaurant_data(
    store: &AdminStore,
    categories: Vec<Category>,
    menu_items: Vec<MenuItem>,
) {
    store.categories().set(categories);
    store.menu_items().set(menu_items);
}

/// Add a category to the store
pub fn store_add_category(store: &AdminStore, category: Category) {
    store.categories().write().push(category);
}

/// Remove a category from the store by ID. Items keep their reference to a
/// deleted category; the label lookup falls back to a placeholder.
pub fn store_remove_category(store: &AdminStore, category_id: u32) {
    store.categories().write().retain(|c| c.id != category_id);
}

/// Add a menu item to the store
pub fn store_add_item(store: &AdminStore, item: MenuItem) {
    store.menu_items().write().push(item);
}

/// Replace a menu item in the store by ID
pub fn store_replace_item(store: &AdminStore, updated: MenuItem) {
    store
        .menu_items()
        .write()
        .iter_mut()
        .find(|item| item.id == updated.id)
        .map(|item| *item = updated);
}

/// Remove a menu item from the store by ID
pub fn store_remove_item(store: &AdminStore, item_id: u32) {
    store.menu_items().write().retain(|item| item.id != item_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: u32, name: &str) -> Restaurant {
        Restaurant { id, name: name.to_string() }
    }

    fn category(id: u32, name: &str) -> Category {
        Category { id, name: name.to_string() }
    }

    fn menu_item(id: u32, name: &str, category_id: Option<u32>) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: None,
            price: 4.5,
            category_id,
            is_available: true,
            image_url: None,
            category: None,
        }
    }

    #[test]
    fn loading_restaurants_selects_the_first_by_default() {
        let store = AdminStore::new(AdminState::default());

        store_set_restaurants(&store, vec![restaurant(3, "Cafe A"), restaurant(4, "Cafe B")]);

        assert_eq!(store.selected_restaurant().get_untracked(), Some(3));
        assert_eq!(store.restaurants().get_untracked().len(), 2);
    }

    #[test]
    fn loading_restaurants_keeps_an_existing_selection() {
        let store = AdminStore::new(AdminState::default());
        store.selected_restaurant().set(Some(4));

        store_set_restaurants(&store, vec![restaurant(3, "Cafe A"), restaurant(4, "Cafe B")]);

        assert_eq!(store.selected_restaurant().get_untracked(), Some(4));
    }

    #[test]
    fn adding_a_restaurant_appends_the_server_echo() {
        let store = AdminStore::new(AdminState::default());
        store_set_restaurants(&store, vec![restaurant(1, "Cafe A")]);

        store_add_restaurant(&store, restaurant(2, "Cafe B"));

        let restaurants = store.restaurants().get_untracked();
        assert_eq!(restaurants.len(), 2);
        assert_eq!(restaurants[1].id, 2);
        assert_eq!(restaurants[1].name, "Cafe B");
        assert_eq!(store.selected_restaurant().get_untracked(), Some(1));
    }

    #[test]
    fn first_restaurant_created_into_an_empty_list_is_selected() {
        let store = AdminStore::new(AdminState::default());

        store_add_restaurant(&store, restaurant(9, "Cafe Solo"));

        assert_eq!(store.selected_restaurant().get_untracked(), Some(9));
    }

    #[test]
    fn commit_replaces_both_collections_together() {
        let store = AdminStore::new(AdminState::default());
        store_commit_restaurant_data(
            &store,
            vec![category(1, "Starters")],
            vec![menu_item(1, "Soup", Some(1))],
        );

        store_commit_restaurant_data(
            &store,
            vec![category(2, "Mains")],
            vec![menu_item(2, "Curry", Some(2)), menu_item(3, "Rice", None)],
        );

        assert_eq!(store.categories().get_untracked().len(), 1);
        assert_eq!(store.categories().get_untracked()[0].name, "Mains");
        assert_eq!(store.menu_items().get_untracked().len(), 2);
    }

    #[test]
    fn adding_a_category_appends_exactly_one_entry() {
        let store = AdminStore::new(AdminState::default());
        store_add_category(&store, category(1, "Starters"));

        store_add_category(&store, category(2, "Desserts"));

        let categories = store.categories().get_untracked();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].name, "Desserts");
    }

    #[test]
    fn removing_a_category_leaves_menu_items_untouched() {
        let store = AdminStore::new(AdminState::default());
        store_commit_restaurant_data(
            &store,
            vec![category(1, "Starters"), category(2, "Mains")],
            vec![menu_item(1, "Soup", Some(1)), menu_item(2, "Curry", Some(2))],
        );

        store_remove_category(&store, 1);

        let categories = store.categories().get_untracked();
        assert_eq!(categories.len(), 1);
        assert!(categories.iter().all(|c| c.id != 1));

        // No cascade: the orphaned item stays, its label falls back later
        let items = store.menu_items().get_untracked();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].clone().with_category_label(&categories).category_label(), "-");
    }

    #[test]
    fn adding_an_item_appends_the_server_echo() {
        let store = AdminStore::new(AdminState::default());

        store_add_item(&store, menu_item(5, "Soup", Some(1)));

        let items = store.menu_items().get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 5);
        assert_eq!(items[0].name, "Soup");
    }

    #[test]
    fn replacing_an_item_keeps_the_list_length() {
        let store = AdminStore::new(AdminState::default());
        store_add_item(&store, menu_item(5, "Soup", Some(1)));
        store_add_item(&store, menu_item(6, "Curry", None));

        let mut updated = menu_item(5, "Tomato Soup", Some(1));
        updated.price = 5.0;
        store_replace_item(&store, updated);

        let items = store.menu_items().get_untracked();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Tomato Soup");
        assert_eq!(items[0].price, 5.0);
        assert_eq!(items[1].name, "Curry");
    }

    #[test]
    fn replacing_an_unknown_item_is_a_no_op() {
        let store = AdminStore::new(AdminState::default());
        store_add_item(&store, menu_item(5, "Soup", None));

        store_replace_item(&store, menu_item(99, "Ghost", None));

        let items = store.menu_items().get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Soup");
    }

    #[test]
    fn removing_an_item_deletes_exactly_that_id() {
        let store = AdminStore::new(AdminState::default());
        store_add_item(&store, menu_item(5, "Soup", None));
        store_add_item(&store, menu_item(6, "Curry", None));

        store_remove_item(&store, 5);

        let items = store.menu_items().get_untracked();
        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|item| item.id != 5));
    }

    #[test]
    fn toggling_availability_twice_restores_the_original() {
        let store = AdminStore::new(AdminState::default());
        let original = menu_item(5, "Soup", Some(1));
        store_add_item(&store, original.clone());

        let mut toggled = original.clone();
        toggled.is_available = !toggled.is_available;
        store_replace_item(&store, toggled);
        assert!(!store.menu_items().get_untracked()[0].is_available);

        let mut toggled_back = store.menu_items().get_untracked()[0].clone();
        toggled_back.is_available = !toggled_back.is_available;
        store_replace_item(&store, toggled_back);

        assert_eq!(store.menu_items().get_untracked()[0], original);
    }
}
