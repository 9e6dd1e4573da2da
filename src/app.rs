//! CafeSaaS Frontend App
//!
//! Routing shell wiring the admin console, the table viewer and the access
//! gate together, with the configured API client provided via context.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::{AccessGate, AdminPage, TableMenuPage};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::session::Session;

#[component]
pub fn App() -> impl IntoView {
    let api = ApiClient::new(ApiConfig::from_env());
    let session = signal(None::<Session>);

    // Provide context to all children
    provide_context(AppContext::new(api, session));

    view! {
        <Router>
            <Routes fallback=|| view! { <AccessGate /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/admin" /> } />
                <Route path=path!("/admin") view=AdminPage />
                <Route path=path!("/table/:id") view=TableMenuPage />
                <Route path=path!("/blocked") view=AccessGate />
            </Routes>
        </Router>
    }
}
