//! Menu API Client
//!
//! HTTP bindings to the backend REST API, organized by resource.

mod categories;
mod error;
mod menu;
mod restaurants;
mod table;

pub use error::ApiError;

use gloo_net::http::Response;

use crate::config::ApiConfig;
use crate::models::{Category, MenuItem};

/// Thin fetch wrapper around the REST API, constructed once with its
/// configuration and shared through context.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    /// Categories and menu items for one restaurant, fetched together.
    /// Neither result is returned unless both requests succeed.
    pub async fn load_restaurant_data(
        &self,
        restaurant_id: u32,
    ) -> Result<(Vec<Category>, Vec<MenuItem>), ApiError> {
        futures::try_join!(self.list_categories(restaurant_id), self.list_menu(restaurant_id))
    }
}

/// Reject non-2xx responses before any decoding.
fn ok_or_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status()))
    }
}
