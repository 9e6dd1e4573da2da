//! Admin Page Component
//!
//! Session gate: probes the identity provider once on mount and unlocks the
//! dashboard only while a session is present.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{AdminDashboard, LoginForm};
use crate::context::use_app_context;
use crate::session;

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.session;
    let (checked, set_checked) = signal(false);

    // Check if an admin session already exists
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let ctx = ctx.clone();
            spawn_local(async move {
                if let Ok(existing) = session::current_session().await {
                    ctx.set_session(existing);
                }
                set_checked.set(true);
            });
        });
    }

    view! {
        <Show
            when=move || checked.get()
            fallback=|| view! { <div class="status-line" role="status">"Checking session..."</div> }
        >
            <Show when=move || session.get().is_some() fallback=|| view! { <LoginForm /> }>
                <AdminDashboard />
            </Show>
        </Show>
    }
}
