// src/models/mod.rs

//! Domain models for the scraper.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod job;
mod outcome;

// Re-export all public types
pub use config::{
    Config, CrawlerConfig, FailurePolicy, OutputConfig, SelectorConfig, SiteConfig,
};
pub use job::{CONDITION_TOKENS, CSV_HEADERS, ExtractedJob, ListingCard};
pub use outcome::{PageBatch, PageFailure, ScrapeOutcome, SkippedCard};
