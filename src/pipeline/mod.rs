//! Pipeline entry points for scraper operations.
//!
//! - `run_scrape`: Discover pages, fetch them all, write the records
//! - `run_discover`: Count result pages for a term without fetching them

pub mod scrape;

pub use scrape::{run_discover, run_scrape};
