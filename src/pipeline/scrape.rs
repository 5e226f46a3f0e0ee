// src/pipeline/scrape.rs

//! Job search scraping pipeline.

use chrono::Utc;
use futures::stream::{self, StreamExt};

use crate::error::{AppError, Result};
use crate::models::{Config, FailurePolicy, PageFailure, ScrapeOutcome};
use crate::services::{JobExtractor, PageFetcher, PageSource, PaginationDiscoverer};
use crate::storage::JobStorage;
use crate::utils::log::{header, step, summary};
use crate::utils::url::search_url;

/// Count the result pages a search term has.
pub async fn run_discover(config: &Config, source: &dyn PageSource, term: &str) -> Result<usize> {
    let extractor = JobExtractor::from_config(&config.selectors)?;
    let base = search_url(&config.site, term)?;
    PaginationDiscoverer::new(source, extractor.selectors())
        .discover(&base)
        .await
}

/// Run a full scrape for `term` and hand every record to `storage`.
///
/// Pages are fetched with at most `crawler.max_concurrent` in flight. With
/// [`FailurePolicy::Abort`] the first failed page ends the run before anything
/// is written; with [`FailurePolicy::Continue`] failed pages are recorded in
/// the outcome and the remaining records are still written.
pub async fn run_scrape(
    config: &Config,
    source: &dyn PageSource,
    storage: &dyn JobStorage,
    term: &str,
) -> Result<ScrapeOutcome> {
    let started_at = Utc::now();
    header(&format!("Scraping job listings for '{term}'"));

    let extractor = JobExtractor::from_config(&config.selectors)?;
    let base = search_url(&config.site, term)?;

    step(1, 3, "Discovering result pages");
    let page_count = PaginationDiscoverer::new(source, extractor.selectors())
        .discover(&base)
        .await?;
    log::info!("Found {page_count} result pages");

    step(2, 3, &format!("Fetching {page_count} pages"));
    let fetcher = PageFetcher::new(
        source,
        &extractor,
        &config.site.page_param,
        config.crawler.max_concurrent_cards,
    );
    let policy = config.crawler.on_page_error;

    let mut jobs = Vec::new();
    let mut skipped_cards = Vec::new();
    let mut page_failures = Vec::new();
    let mut pages_fetched = 0;

    {
        let fetcher = &fetcher;
        let base = &base;
        let mut pages = stream::iter(0..page_count)
            .map(|page| async move { (page, fetcher.fetch_page(base, page).await) })
            .buffer_unordered(config.crawler.max_concurrent.max(1));

        while let Some((page, result)) = pages.next().await {
            match result {
                Ok(batch) => {
                    pages_fetched += 1;
                    jobs.extend(batch.jobs);
                    skipped_cards.extend(batch.skipped);
                }
                Err(error) => match policy {
                    FailurePolicy::Abort => {
                        log::error!("Page {page} failed, aborting run: {error}");
                        return Err(AppError::page(page, error));
                    }
                    FailurePolicy::Continue => {
                        log::warn!("Page {page} failed, continuing: {error}");
                        page_failures.push(PageFailure {
                            page,
                            message: error.to_string(),
                        });
                    }
                },
            }
        }
    }

    debug_assert_eq!(pages_fetched + page_failures.len(), page_count);

    step(3, 3, "Writing results");
    let written = storage.write_jobs(&jobs).await?;

    let outcome = ScrapeOutcome {
        term: term.to_string(),
        page_count,
        pages_fetched,
        jobs,
        skipped_cards,
        page_failures,
        started_at,
        finished_at: Utc::now(),
    };

    summary(
        "Scrape Results",
        &[
            ("Pages", format!("{}/{}", outcome.pages_fetched, page_count)),
            ("Records", outcome.job_count().to_string()),
            ("Skipped cards", outcome.skipped_cards.len().to_string()),
            ("Failed pages", outcome.page_failures.len().to_string()),
            ("Output", written.location),
            ("Elapsed", format!("{} ms", outcome.elapsed_ms())),
        ],
    );

    Ok(outcome)
}
