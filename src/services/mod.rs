//! Service layer for the scraper.
//!
//! This module contains the business logic for:
//! - Fetching result pages (`PageSource`, `HttpSource`)
//! - Compiling the results markup selectors (`Selectors`)
//! - Turning listing cards into records (`JobExtractor`)
//! - Counting result pages (`PaginationDiscoverer`)
//! - Fetching and extracting one results page (`PageFetcher`)

mod extractor;
mod fetcher;
mod pagination;
mod selectors;
mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use extractor::JobExtractor;
pub use fetcher::PageFetcher;
pub use pagination::PaginationDiscoverer;
pub use selectors::Selectors;
pub use source::{HttpSource, PageSource};
