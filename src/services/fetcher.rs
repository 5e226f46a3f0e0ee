// src/services/fetcher.rs

//! Fetches one results page and extracts every card on it.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use url::Url;

use crate::error::Result;
use crate::models::{PageBatch, SkippedCard};
use crate::utils::url::page_url;

use super::{JobExtractor, PageSource};

/// Fetches a single results page and fans extraction out over its cards.
pub struct PageFetcher<'a> {
    source: &'a dyn PageSource,
    extractor: &'a JobExtractor,
    page_param: &'a str,
    card_concurrency: usize,
}

impl<'a> PageFetcher<'a> {
    pub fn new(
        source: &'a dyn PageSource,
        extractor: &'a JobExtractor,
        page_param: &'a str,
        card_concurrency: usize,
    ) -> Self {
        Self {
            source,
            extractor,
            page_param,
            card_concurrency: card_concurrency.max(1),
        }
    }

    /// Fetch page `page` of the search at `search_url`.
    ///
    /// Every card found ends up either in `jobs` or in `skipped`. Record order
    /// within the batch follows completion, not document order.
    pub async fn fetch_page(&self, search_url: &Url, page: usize) -> Result<PageBatch> {
        let url = page_url(search_url, self.page_param, page);
        log::info!("Requesting {url}");

        let body = self.source.fetch(&url).await?;
        let cards = self.extractor.read_cards(&body);
        let card_count = cards.len();

        let mut batch = PageBatch {
            page,
            ..PageBatch::default()
        };

        let marker: Arc<str> = Arc::from(self.extractor.summary_marker());
        let results = run_bounded(cards, self.card_concurrency, move |card| {
            let result = card.extract(&marker);
            (card, result)
        })
        .await?;

        for (card, result) in results {
            match result {
                Ok(job) => batch.jobs.push(job),
                Err(error) => {
                    log::warn!("Skipping card {:?} on page {}: {}", card.id, page, error);
                    batch.skipped.push(SkippedCard {
                        page,
                        id: card.id,
                        reason: error.to_string(),
                    });
                }
            }
        }

        debug_assert_eq!(batch.jobs.len() + batch.skipped.len(), card_count);
        log::debug!(
            "Page {}: {} cards, {} extracted",
            page,
            card_count,
            batch.jobs.len()
        );
        Ok(batch)
    }
}

/// Run `work` over every item on the blocking pool, at most `limit` at a time.
///
/// Returns once all items are done; results come back in completion order.
async fn run_bounded<T, R, F>(items: Vec<T>, limit: usize, work: F) -> Result<Vec<R>>
where
    T: Send + 'static,
    R: Send + 'static,
    F: Fn(T) -> R + Send + Sync + 'static,
{
    let work = Arc::new(work);
    let mut tasks = stream::iter(items)
        .map(|item| {
            let work = Arc::clone(&work);
            tokio::task::spawn_blocking(move || work(item))
        })
        .buffer_unordered(limit.max(1));

    let mut results = Vec::new();
    while let Some(joined) = tasks.next().await {
        results.push(joined?);
    }
    Ok(results)
}
