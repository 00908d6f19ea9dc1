//! Article endpoints.

use emvi_core::constants::endpoints;
use emvi_core::error::{EmviError, EmviResult};

use crate::client::{build_url, EmviClient};
use crate::response::ArticleDetail;

impl EmviClient {
    /// Get an article, its content and authors.
    ///
    /// `lang_id` selects the content language (empty for the default
    /// language), `version` the content version (0 for the latest).
    pub async fn get_article(
        &self,
        id: &str,
        lang_id: &str,
        version: u32,
    ) -> EmviResult<ArticleDetail> {
        if id.is_empty() {
            return Err(EmviError::InvalidUrl("article id must not be empty".into()));
        }

        let version = if version > 0 {
            version.to_string()
        } else {
            String::new()
        };

        let url = build_url(
            self.endpoint(endpoints::ARTICLE, &[id])?,
            "",
            None,
            &[("lang_id", lang_id), ("version", &version)],
        );
        self.get_json(url).await
    }
}
