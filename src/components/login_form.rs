//! Login Form Component
//!
//! Credential form submitted to the external identity provider. A failed
//! attempt is reported once, never retried.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::session;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = {
        let ctx = ctx.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let ctx = ctx.clone();
            let email = email.get();
            let password = password.get();
            spawn_local(async move {
                match session::sign_in(&email, &password).await {
                    Ok(session) => ctx.set_session(Some(session)),
                    Err(message) => set_error.set(Some(format!("Login failed: {message}"))),
                }
            });
        }
    };

    view! {
        <div class="login-screen">
            <form class="login-card" on:submit=on_submit>
                <h1>"Admin Login"</h1>
                {move || error.get().map(|message| view! {
                    <p class="error-text" role="alert">{message}</p>
                })}
                <input
                    type="email"
                    placeholder="Email"
                    aria-label="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    aria-label="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" aria-label="Login">"Login"</button>
            </form>
        </div>
    }
}
