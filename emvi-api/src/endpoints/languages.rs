//! Language endpoints.

use emvi_core::constants::endpoints;
use emvi_core::error::EmviResult;
use emvi_models::Language;

use crate::client::EmviClient;

impl EmviClient {
    /// Get all languages configured for the organization.
    pub async fn get_languages(&self) -> EmviResult<Vec<Language>> {
        let url = self.endpoint(endpoints::LANGUAGES, &[])?;
        self.get_json(url).await
    }
}
