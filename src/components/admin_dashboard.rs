//! Admin Dashboard Component
//!
//! Authenticated console managing restaurants, categories and menu items.
//! Holds the store, the single error slot and the item form mode.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::menu_item_form::ItemFormMode;
use super::{CategoryPanel, MenuItemForm, MenuItemTable, RestaurantSidebar};
use crate::context::use_app_context;
use crate::store::{
    store_commit_restaurant_data, store_set_restaurants, AdminState, AdminStateStoreFields,
    AdminStore,
};

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store: AdminStore = Store::new(AdminState::default());
    provide_context(store);

    let (error, set_error) = signal(None::<String>);
    let (form_mode, set_form_mode) = signal(ItemFormMode::Creating);

    // Fetch the restaurant list once on entering the dashboard
    {
        let api = ctx.api.clone();
        Effect::new(move |_| {
            let api = api.clone();
            spawn_local(async move {
                match api.list_restaurants().await {
                    Ok(restaurants) => store_set_restaurants(&store, restaurants),
                    Err(err) => set_error.set(Some(format!("Failed to fetch restaurants: {err}"))),
                }
            });
        });
    }

    // Reload categories and menu items whenever the selection changes.
    // Both requests go out together and commit together, or not at all.
    {
        let api = ctx.api.clone();
        Effect::new(move |_| {
            let Some(restaurant_id) = store.selected_restaurant().get() else {
                return;
            };
            web_sys::console::log_1(
                &format!("[ADMIN] Loading data for restaurant {restaurant_id}").into(),
            );
            let api = api.clone();
            spawn_local(async move {
                match api.load_restaurant_data(restaurant_id).await {
                    Ok((categories, menu_items)) => {
                        store_commit_restaurant_data(&store, categories, menu_items);
                    }
                    Err(err) => set_error.set(Some(format!("Failed to fetch data: {err}"))),
                }
            });
        });
    }

    view! {
        <div class="admin-layout">
            <RestaurantSidebar set_error=set_error />

            <main class="admin-content">
                {move || error.get().map(|message| view! {
                    <div class="error-banner" role="alert">{message}</div>
                })}

                <Show when=move || store.selected_restaurant().get().is_some()>
                    <h2>"Manage Menu"</h2>
                    <CategoryPanel set_error=set_error />
                    <MenuItemForm mode=form_mode set_mode=set_form_mode set_error=set_error />
                    <MenuItemTable set_mode=set_form_mode set_error=set_error />
                </Show>
            </main>
        </div>
    }
}
