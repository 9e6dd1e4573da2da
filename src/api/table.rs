//! Public Table Menu Endpoint

use gloo_net::http::Request;

use super::{ok_or_status, ApiClient, ApiError};
use crate::models::TableMenu;

impl ApiClient {
    /// Table-scoped read-only menu, already grouped by category name.
    pub async fn table_menu(&self, table_id: &str) -> Result<TableMenu, ApiError> {
        let response = Request::get(&self.url(&format!("/api/menu/{table_id}")))
            .send()
            .await?;
        Ok(ok_or_status(response)?.json().await?)
    }
}
