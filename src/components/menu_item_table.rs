//! Menu Item Table Component
//!
//! Listing with edit, availability toggle and delete actions. Rows are
//! rebuilt from the store on every change since toggles and edits mutate
//! existing entries in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::menu_item_form::ItemFormMode;
use crate::context::use_app_context;
use crate::models::format_price;
use crate::store::{
    store_remove_item, store_replace_item, use_admin_store, AdminStateStoreFields,
};

#[component]
pub fn MenuItemTable(
    set_mode: WriteSignal<ItemFormMode>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let toggle_availability = {
        let api = ctx.api.clone();
        move |item_id: u32, current: bool| {
            let Some(restaurant_id) = store.selected_restaurant().get() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                match api.set_availability(restaurant_id, item_id, !current).await {
                    Ok(updated) => store_replace_item(&store, updated),
                    Err(err) => {
                        set_error.set(Some(format!("Failed to update availability: {err}")))
                    }
                }
            });
        }
    };

    let delete_item = {
        let api = ctx.api.clone();
        move |item_id: u32| {
            let Some(restaurant_id) = store.selected_restaurant().get() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                match api.delete_menu_item(restaurant_id, item_id).await {
                    Ok(()) => store_remove_item(&store, item_id),
                    Err(err) => set_error.set(Some(format!("Failed to delete item: {err}"))),
                }
            });
        }
    };

    view! {
        <section class="panel">
            <h3>"Menu Items"</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Description"</th>
                        <th class="num">"Price"</th>
                        <th class="center">"Available"</th>
                        <th class="center">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let toggle_availability = toggle_availability.clone();
                        let delete_item = delete_item.clone();
                        store
                            .menu_items()
                            .get()
                            .into_iter()
                            .map(|item| {
                                let id = item.id;
                                let available = item.is_available;
                                let toggle_availability = toggle_availability.clone();
                                let delete_item = delete_item.clone();
                                let edit_item = item.clone();
                                view! {
                                    <tr>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.category_label().to_string()}</td>
                                        <td>{item.description_label().to_string()}</td>
                                        <td class="num">{format!("₹{}", format_price(item.price))}</td>
                                        <td class="center">
                                            {if available {
                                                view! { <span class="available">"✓"</span> }
                                            } else {
                                                view! { <span class="unavailable">"✗"</span> }
                                            }}
                                        </td>
                                        <td class="center actions">
                                            <button
                                                class="edit-btn"
                                                on:click=move |_| {
                                                    set_mode.set(ItemFormMode::Editing(edit_item.clone()))
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <button on:click=move |_| toggle_availability(id, available)>
                                                {if available { "Make Unavailable" } else { "Make Available" }}
                                            </button>
                                            <button class="delete-btn" on:click=move |_| delete_item(id)>
                                                "×"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}
