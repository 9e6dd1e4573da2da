//! Table Menu Page Component
//!
//! Read-only QR menu for one table, grouped by category. The fetch
//! revalidates whenever the table identifier in the route changes; a failed
//! fetch navigates to the access gate.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::context::use_app_context;
use crate::models::{format_price, MenuItem, TableMenu};

/// Stock photo shown when an item has no image of its own.
const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1550547660-d9450f859349";

/// Discrete states of the one menu fetch
#[derive(Clone, Debug, PartialEq)]
enum ViewerState {
    Loading,
    Ready(TableMenu),
    Failed,
}

#[component]
pub fn TableMenuPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let navigate = use_navigate();

    let (state, set_state) = signal(ViewerState::Loading);

    // Fetch the grouped menu, re-running when the table id changes
    {
        let api = ctx.api.clone();
        Effect::new(move |_| {
            let table_id = params.read().get("id").unwrap_or_default();
            set_state.set(ViewerState::Loading);
            let api = api.clone();
            spawn_local(async move {
                match api.table_menu(&table_id).await {
                    Ok(menu) => set_state.set(ViewerState::Ready(menu)),
                    Err(_) => set_state.set(ViewerState::Failed),
                }
            });
        });
    }

    // A failed fetch is the one error that navigates instead of rendering
    Effect::new(move |_| {
        if state.get() == ViewerState::Failed {
            navigate("/blocked", Default::default());
        }
    });

    view! {
        <div class="table-menu">
            <header class="table-menu-header">
                <h1>"Menu"</h1>
            </header>

            {move || match state.get() {
                ViewerState::Loading => {
                    view! { <div class="status-line" role="status">"Loading menu..."</div> }
                        .into_any()
                }
                ViewerState::Failed => {
                    view! {
                        <div class="status-line error-text" role="alert">
                            "Failed to load menu. Please try again."
                        </div>
                    }
                        .into_any()
                }
                ViewerState::Ready(menu) if menu.is_empty() => {
                    view! { <p class="empty-message">"No menu items available."</p> }.into_any()
                }
                ViewerState::Ready(menu) => menu
                    .into_iter()
                    .map(|(category, items)| {
                        view! {
                            <section class="menu-section">
                                <h2>{category}</h2>
                                <div class="menu-grid">
                                    {items
                                        .into_iter()
                                        .map(|item| view! { <MenuCard item=item /> })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

/// Single read-only item card
#[component]
fn MenuCard(item: MenuItem) -> impl IntoView {
    let image = item.image_url.clone().unwrap_or_else(|| FALLBACK_IMAGE.to_string());
    let description = item
        .description
        .clone()
        .unwrap_or_else(|| "No description".to_string());

    view! {
        <div class="menu-card">
            <img src=image alt=item.name.clone() />
            <h3>{item.name.clone()}</h3>
            <p class="menu-card-description">{description}</p>
            <p class="menu-card-price">{format!("₹{}", format_price(item.price))}</p>
        </div>
    }
}
