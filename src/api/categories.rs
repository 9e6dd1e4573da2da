//! Category Endpoints

use gloo_net::http::Request;
use serde::Serialize;

use super::{ok_or_status, ApiClient, ApiError};
use crate::models::Category;

#[derive(Serialize)]
struct NewCategory<'a> {
    name: &'a str,
}

impl ApiClient {
    pub async fn list_categories(&self, restaurant_id: u32) -> Result<Vec<Category>, ApiError> {
        let response = Request::get(&self.url(&format!("/api/restaurants/{restaurant_id}/categories")))
            .send()
            .await?;
        Ok(ok_or_status(response)?.json().await?)
    }

    pub async fn create_category(
        &self,
        restaurant_id: u32,
        name: &str,
    ) -> Result<Category, ApiError> {
        let response = Request::post(&self.url(&format!("/api/restaurants/{restaurant_id}/categories")))
            .json(&NewCategory { name })?
            .send()
            .await?;
        Ok(ok_or_status(response)?.json().await?)
    }

    pub async fn delete_category(
        &self,
        restaurant_id: u32,
        category_id: u32,
    ) -> Result<(), ApiError> {
        let response = Request::delete(
            &self.url(&format!("/api/restaurants/{restaurant_id}/categories/{category_id}")),
        )
        .send()
        .await?;
        ok_or_status(response)?;
        Ok(())
    }
}
