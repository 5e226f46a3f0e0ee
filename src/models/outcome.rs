//! Results of a scrape run.

use chrono::{DateTime, Utc};

use super::ExtractedJob;

/// Records produced by one results page.
#[derive(Debug, Default)]
pub struct PageBatch {
    pub page: usize,
    pub jobs: Vec<ExtractedJob>,
    pub skipped: Vec<SkippedCard>,
}

/// A card that was found but could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCard {
    pub page: usize,
    pub id: String,
    pub reason: String,
}

/// A page that could not be fetched while running with the `continue` policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub page: usize,
    pub message: String,
}

/// Summary of a finished scrape.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub term: String,
    pub page_count: usize,
    pub pages_fetched: usize,
    pub jobs: Vec<ExtractedJob>,
    pub skipped_cards: Vec<SkippedCard>,
    pub page_failures: Vec<PageFailure>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ScrapeOutcome {
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Wall-clock duration of the run in milliseconds.
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
