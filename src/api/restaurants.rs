//! Restaurant Endpoints

use gloo_net::http::Request;
use serde::Serialize;

use super::{ok_or_status, ApiClient, ApiError};
use crate::models::Restaurant;

#[derive(Serialize)]
struct NewRestaurant<'a> {
    name: &'a str,
}

impl ApiClient {
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        let response = Request::get(&self.url("/api/restaurants")).send().await?;
        Ok(ok_or_status(response)?.json().await?)
    }

    pub async fn create_restaurant(&self, name: &str) -> Result<Restaurant, ApiError> {
        let response = Request::post(&self.url("/api/restaurants"))
            .json(&NewRestaurant { name })?
            .send()
            .await?;
        Ok(ok_or_status(response)?.json().await?)
    }
}
