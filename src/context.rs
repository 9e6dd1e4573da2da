//! Application Context
//!
//! Shared services provided via Leptos Context API: the configured REST
//! client and the session observed from the identity provider.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::session::Session;

/// App-wide services and session state provided via context
#[derive(Clone)]
pub struct AppContext {
    /// REST client built from the explicit API configuration
    pub api: ApiClient,
    /// Current admin session - read
    pub session: ReadSignal<Option<Session>>,
    /// Current admin session - write
    set_session: WriteSignal<Option<Session>>,
}

impl AppContext {
    pub fn new(
        api: ApiClient,
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
    ) -> Self {
        Self {
            api,
            session: session.0,
            set_session: session.1,
        }
    }

    /// Store the session state confirmed by the identity provider
    pub fn set_session(&self, session: Option<Session>) {
        self.set_session.set(session);
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
