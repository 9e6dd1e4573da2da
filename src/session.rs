//! Identity Provider Bridge
//!
//! Frontend bindings to the hosted auth SDK exposed on the window global.
//! The client only observes session presence and triggers sign-in/sign-out;
//! credential handling lives entirely in the provider.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__CAFESAAS_AUTH__"], js_name = getSession, catch)]
    async fn get_session_js() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__CAFESAAS_AUTH__"], js_name = signInWithPassword, catch)]
    async fn sign_in_js(credentials: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__CAFESAAS_AUTH__"], js_name = signOut, catch)]
    async fn sign_out_js() -> Result<JsValue, JsValue>;
}

/// Provider-issued session state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Existing session, if the provider still holds one.
pub async fn current_session() -> Result<Option<Session>, String> {
    let value = get_session_js().await.map_err(js_message)?;
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| e.to_string())
}

pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    let credentials =
        serde_wasm_bindgen::to_value(&Credentials { email, password }).map_err(|e| e.to_string())?;
    let value = sign_in_js(credentials).await.map_err(js_message)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

pub async fn sign_out() -> Result<(), String> {
    sign_out_js().await.map_err(js_message)?;
    Ok(())
}

fn js_message(err: JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{err:?}"))
}
