//! Menu Item Endpoints
//!
//! Create and update go out as multipart bodies so an image file can ride
//! along; the availability toggle is a plain JSON patch.

use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use super::{ok_or_status, ApiClient, ApiError};
use crate::models::{MenuItem, MenuItemDraft};

#[derive(Serialize)]
struct AvailabilityPatch {
    is_available: bool,
}

impl ApiClient {
    pub async fn list_menu(&self, restaurant_id: u32) -> Result<Vec<MenuItem>, ApiError> {
        let response = Request::get(&self.url(&format!("/api/restaurants/{restaurant_id}/menu")))
            .send()
            .await?;
        Ok(ok_or_status(response)?.json().await?)
    }

    pub async fn create_menu_item(
        &self,
        restaurant_id: u32,
        draft: &MenuItemDraft,
        image: Option<&File>,
    ) -> Result<MenuItem, ApiError> {
        let response = Request::post(&self.url(&format!("/api/restaurants/{restaurant_id}/menu")))
            .body(multipart_body(draft, image)?)?
            .send()
            .await?;
        Ok(ok_or_status(response)?.json().await?)
    }

    pub async fn update_menu_item(
        &self,
        restaurant_id: u32,
        item_id: u32,
        draft: &MenuItemDraft,
        image: Option<&File>,
    ) -> Result<MenuItem, ApiError> {
        let response =
            Request::patch(&self.url(&format!("/api/restaurants/{restaurant_id}/menu/{item_id}")))
                .body(multipart_body(draft, image)?)?
                .send()
                .await?;
        Ok(ok_or_status(response)?.json().await?)
    }

    /// Partial update carrying only the inverted availability flag.
    pub async fn set_availability(
        &self,
        restaurant_id: u32,
        item_id: u32,
        is_available: bool,
    ) -> Result<MenuItem, ApiError> {
        let response =
            Request::patch(&self.url(&format!("/api/restaurants/{restaurant_id}/menu/{item_id}")))
                .json(&AvailabilityPatch { is_available })?
                .send()
                .await?;
        Ok(ok_or_status(response)?.json().await?)
    }

    pub async fn delete_menu_item(&self, restaurant_id: u32, item_id: u32) -> Result<(), ApiError> {
        let response =
            Request::delete(&self.url(&format!("/api/restaurants/{restaurant_id}/menu/{item_id}")))
                .send()
                .await?;
        ok_or_status(response)?;
        Ok(())
    }
}

/// Multipart payload for create/update; the image is attached only when the
/// admin picked a new file.
fn multipart_body(draft: &MenuItemDraft, image: Option<&File>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(form_err)?;
    form.append_with_str("name", &draft.name).map_err(form_err)?;
    form.append_with_str("description", &draft.description).map_err(form_err)?;
    form.append_with_str("price", &draft.price).map_err(form_err)?;
    let category_id = draft.category_id.map(|id| id.to_string()).unwrap_or_default();
    form.append_with_str("category_id", &category_id).map_err(form_err)?;
    form.append_with_str("is_available", if draft.is_available { "true" } else { "false" })
        .map_err(form_err)?;
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(form_err)?;
    }
    Ok(form)
}

fn form_err(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}
