//! Access Gate Component
//!
//! Static terminal view for invalid or failed table links. No external
//! calls; only navigation leads here.

use leptos::prelude::*;

#[component]
pub fn AccessGate() -> impl IntoView {
    view! {
        <div class="access-gate">
            <div class="access-gate-card">
                <h1>"Access Restricted"</h1>
                <p>"Please scan a valid table QR code to view the menu."</p>
            </div>
        </div>
    }
}
