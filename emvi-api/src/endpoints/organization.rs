//! Organization endpoints.

use emvi_core::constants::endpoints;
use emvi_core::error::EmviResult;
use emvi_models::Organization;

use crate::client::EmviClient;

impl EmviClient {
    /// Get the organization the client belongs to.
    pub async fn get_organization(&self) -> EmviResult<Organization> {
        let url = self.endpoint(endpoints::ORGANIZATION, &[])?;
        self.get_json(url).await
    }
}
