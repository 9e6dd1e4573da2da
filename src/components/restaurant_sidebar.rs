//! Restaurant Sidebar Component
//!
//! Restaurant selector with inline create form and logout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::session;
use crate::store::{store_add_restaurant, use_admin_store, AdminStateStoreFields};

#[component]
pub fn RestaurantSidebar(set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let (new_name, set_new_name) = signal(String::new());

    let on_add = {
        let api = ctx.api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let name = new_name.get();
            if name.is_empty() {
                set_error.set(Some("Restaurant name is required".to_string()));
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.create_restaurant(&name).await {
                    Ok(created) => {
                        store_add_restaurant(&store, created);
                        set_new_name.set(String::new());
                    }
                    Err(err) => set_error.set(Some(format!("Failed to add restaurant: {err}"))),
                }
            });
        }
    };

    let on_logout = {
        let ctx = ctx.clone();
        move |_| {
            let ctx = ctx.clone();
            spawn_local(async move {
                if session::sign_out().await.is_ok() {
                    ctx.set_session(None);
                }
            });
        }
    };

    view! {
        <aside class="sidebar">
            <h1>"CafeSaaS Admin"</h1>

            <label class="field-label">"Select Restaurant"</label>
            <select on:change=move |ev| {
                if let Ok(id) = event_target_value(&ev).parse() {
                    store.selected_restaurant().set(Some(id));
                }
            }>
                <For
                    each=move || store.restaurants().get()
                    key=|restaurant| restaurant.id
                    children=move |restaurant| {
                        let id = restaurant.id;
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || store.selected_restaurant().get() == Some(id)
                            >
                                {restaurant.name.clone()}
                            </option>
                        }
                    }
                />
            </select>

            <form class="sidebar-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="New Restaurant"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit">"Add Restaurant"</button>
            </form>

            <button class="logout-btn" on:click=on_logout aria-label="Logout">"Logout"</button>
        </aside>
    }
}
