//! Menu Item Form Component
//!
//! Add/edit form with an explicit mode instead of a nullable editing
//! object. Successful saves merge the server echo with a freshly resolved
//! category label before touching the store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::context::use_app_context;
use crate::models::{MenuItem, MenuItemDraft};
use crate::store::{
    store_add_item, store_replace_item, use_admin_store, AdminStateStoreFields,
};

/// Which item the form is working on
#[derive(Clone, Debug, PartialEq)]
pub enum ItemFormMode {
    Creating,
    Editing(MenuItem),
}

impl ItemFormMode {
    pub fn editing_id(&self) -> Option<u32> {
        match self {
            Self::Creating => None,
            Self::Editing(item) => Some(item.id),
        }
    }
}

#[component]
pub fn MenuItemForm(
    mode: ReadSignal<ItemFormMode>,
    set_mode: WriteSignal<ItemFormMode>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let (draft, set_draft) = signal(MenuItemDraft::new());
    // DOM file handles are not Send, so the picked image lives in a local signal
    let (image, set_image) = signal_local(None::<web_sys::File>);

    // Reset the draft whenever the mode changes
    Effect::new(move |_| {
        let next = match mode.get() {
            ItemFormMode::Creating => MenuItemDraft::new(),
            ItemFormMode::Editing(item) => MenuItemDraft::from_item(&item),
        };
        set_draft.set(next);
        set_image.set(None);
    });

    let on_submit = {
        let api = ctx.api.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let current = draft.get();
            if let Some(message) = current.missing_required() {
                set_error.set(Some(message.to_string()));
                return;
            }
            let Some(restaurant_id) = store.selected_restaurant().get() else {
                return;
            };
            let editing_id = mode.get().editing_id();
            let categories = store.categories().get();
            let file = image.get();
            let api = api.clone();
            spawn_local(async move {
                let result = match editing_id {
                    None => api.create_menu_item(restaurant_id, &current, file.as_ref()).await,
                    Some(item_id) => {
                        api.update_menu_item(restaurant_id, item_id, &current, file.as_ref()).await
                    }
                };
                match result {
                    Ok(saved) => {
                        let labeled = saved.with_category_label(&categories);
                        match editing_id {
                            None => store_add_item(&store, labeled),
                            Some(_) => store_replace_item(&store, labeled),
                        }
                        set_mode.set(ItemFormMode::Creating);
                        set_draft.set(MenuItemDraft::new());
                        set_image.set(None);
                    }
                    Err(err) => {
                        let verb = if editing_id.is_some() { "update" } else { "add" };
                        set_error.set(Some(format!("Failed to {verb} item: {err}")));
                    }
                }
            });
        }
    };

    let is_editing = move || mode.get().editing_id().is_some();

    view! {
        <section class="panel">
            <h3>{move || if is_editing() { "Edit Item" } else { "Add Menu Item" }}</h3>
            <form class="item-form" on:submit=on_submit>
                <div class="item-form-grid">
                    <input
                        type="text"
                        placeholder="Item Name"
                        prop:value=move || draft.get().name
                        on:input=move |ev| set_draft.update(|d| d.name = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Description"
                        prop:value=move || draft.get().description
                        on:input=move |ev| {
                            set_draft.update(|d| d.description = event_target_value(&ev))
                        }
                    />
                    <input
                        type="number"
                        placeholder="Price"
                        prop:value=move || draft.get().price
                        on:input=move |ev| set_draft.update(|d| d.price = event_target_value(&ev))
                    />
                    <select
                        prop:value=move || {
                            draft.get().category_id.map(|id| id.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.category_id = value.parse().ok());
                        }
                    >
                        <option value="">"Select Category"</option>
                        <For
                            each=move || store.categories().get()
                            key=|category| category.id
                            children=move |category| {
                                view! {
                                    <option value=category.id.to_string()>
                                        {category.name.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                    <input
                        type="file"
                        accept="image/*"
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<HtmlInputElement>().unwrap();
                            set_image.set(input.files().and_then(|list| list.get(0)));
                        }
                    />
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.get().is_available
                            on:change=move |ev| {
                                set_draft.update(|d| d.is_available = event_target_checked(&ev))
                            }
                        />
                        "Available"
                    </label>
                </div>

                <div class="item-form-actions">
                    <button type="submit">
                        {move || if is_editing() { "Update Item" } else { "Add Item" }}
                    </button>
                    {move || is_editing().then(|| view! {
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |_| set_mode.set(ItemFormMode::Creating)
                        >
                            "Cancel"
                        </button>
                    })}
                </div>
            </form>
        </section>
    }
}
