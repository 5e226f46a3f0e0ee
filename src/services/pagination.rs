// src/services/pagination.rs

//! Result page discovery.

use scraper::Html;
use url::Url;

use crate::error::Result;

use super::{PageSource, Selectors};

/// Counts how many result pages a search has.
pub struct PaginationDiscoverer<'a> {
    source: &'a dyn PageSource,
    selectors: &'a Selectors,
}

impl<'a> PaginationDiscoverer<'a> {
    pub fn new(source: &'a dyn PageSource, selectors: &'a Selectors) -> Self {
        Self { source, selectors }
    }

    /// Fetch the first results page and count the links in its pagination
    /// control. No control (or an empty one) yields zero.
    pub async fn discover(&self, search_url: &Url) -> Result<usize> {
        log::info!("Requesting {search_url}");
        let body = self.source.fetch(search_url).await?;
        Ok(self.count(&body))
    }

    fn count(&self, body: &str) -> usize {
        let document = Html::parse_document(body);
        self.selectors.count_page_links(&document)
    }
}
