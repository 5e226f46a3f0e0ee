//! Storage abstractions for scraped job listings.
//!
//! A run produces exactly one output: the full record set, written once after
//! every page has been joined.

pub mod local;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ExtractedJob;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// Number of data rows written (header excluded)
    pub row_count: usize,
    /// Where the rows ended up
    pub location: String,
}

/// Trait for job storage backends.
#[async_trait]
pub trait JobStorage: Send + Sync {
    /// Replace the stored result set with `jobs`.
    async fn write_jobs(&self, jobs: &[ExtractedJob]) -> Result<WriteSummary>;
}
