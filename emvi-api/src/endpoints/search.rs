//! Search endpoints.

use emvi_core::constants::endpoints;
use emvi_core::error::EmviResult;

use crate::client::{build_url, EmviClient};
use crate::filter::{ArticleFilter, Filter};
use crate::response::ArticleSearchResult;

impl EmviClient {
    /// Find articles for the given query and filter.
    ///
    /// Returns one page of articles and the total number of matches. An
    /// empty query matches everything the filter allows; `None` applies no
    /// filter.
    pub async fn find_articles(
        &self,
        query: &str,
        filter: Option<&ArticleFilter>,
    ) -> EmviResult<ArticleSearchResult> {
        let url = build_url(
            self.endpoint(endpoints::SEARCH_ARTICLES, &[])?,
            query,
            filter.map(|f| f as &dyn Filter),
            &[],
        );
        self.get_json(url).await
    }
}
