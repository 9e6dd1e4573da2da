//! Category Panel Component
//!
//! Add form and listing for the selected restaurant's categories. Deleting
//! a category only removes it from the visible list; any cascade is the
//! backend's concern.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{
    store_add_category, store_remove_category, use_admin_store, AdminStateStoreFields,
};

#[component]
pub fn CategoryPanel(set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let (new_name, set_new_name) = signal(String::new());

    let on_add = {
        let api = ctx.api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let name = new_name.get();
            if name.is_empty() {
                set_error.set(Some("Category name is required".to_string()));
                return;
            }
            let Some(restaurant_id) = store.selected_restaurant().get() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                match api.create_category(restaurant_id, &name).await {
                    Ok(created) => {
                        store_add_category(&store, created);
                        set_new_name.set(String::new());
                    }
                    Err(err) => set_error.set(Some(format!("Failed to add category: {err}"))),
                }
            });
        }
    };

    let delete_category = {
        let api = ctx.api.clone();
        move |category_id: u32| {
            let Some(restaurant_id) = store.selected_restaurant().get() else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                match api.delete_category(restaurant_id, category_id).await {
                    Ok(()) => store_remove_category(&store, category_id),
                    Err(err) => set_error.set(Some(format!("Failed to delete category: {err}"))),
                }
            });
        }
    };

    view! {
        <section class="panel">
            <h3>"Add Category"</h3>
            <form class="panel-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Category Name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit">"Add Category"</button>
            </form>

            <h3>"Categories"</h3>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th class="center">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.categories().get()
                        key=|category| category.id
                        children=move |category| {
                            let id = category.id;
                            let delete_category = delete_category.clone();
                            view! {
                                <tr>
                                    <td>{category.name.clone()}</td>
                                    <td class="center">
                                        <button
                                            class="delete-btn"
                                            on:click=move |_| delete_category(id)
                                        >
                                            "×"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
