//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and concurrency settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Search endpoint and link layout of the job board
    #[serde(default)]
    pub site: SiteConfig,

    /// CSS selectors for the search results markup
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Where results are written
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration if the file exists, defaults if it does not.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No config file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.crawler.max_concurrent == 0 {
            return Err(AppError::validation("crawler.max_concurrent must be > 0"));
        }
        if self.crawler.max_concurrent_cards == 0 {
            return Err(AppError::validation(
                "crawler.max_concurrent_cards must be > 0",
            ));
        }
        url::Url::parse(&self.site.search_url)
            .map_err(|e| AppError::validation(format!("site.search_url: {e}")))?;
        if self.site.term_param.trim().is_empty() || self.site.page_param.trim().is_empty() {
            return Err(AppError::validation(
                "site.term_param and site.page_param must be set",
            ));
        }
        if self.selectors.id_attr.trim().is_empty() {
            return Err(AppError::validation("selectors.id_attr is empty"));
        }
        if self.output.path.trim().is_empty() {
            return Err(AppError::validation("output.path is empty"));
        }
        // Surfaces invalid CSS before any request is made.
        crate::services::Selectors::compile(&self.selectors)?;
        Ok(())
    }
}

/// What the orchestrator does when a results page cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// The first failed page aborts the whole run; nothing is written.
    #[default]
    Abort,
    /// Failed pages are recorded and the remaining records are still written.
    Continue,
}

/// HTTP client and concurrency settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum number of result pages fetched at once
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Maximum number of cards extracted at once within a page
    #[serde(default = "defaults::max_concurrent_cards")]
    pub max_concurrent_cards: usize,

    /// Behavior when a page fetch fails
    #[serde(default)]
    pub on_page_error: FailurePolicy,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
            max_concurrent_cards: defaults::max_concurrent_cards(),
            on_page_error: FailurePolicy::default(),
        }
    }
}

/// Search endpoint and relay link layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Search results endpoint, without query string
    #[serde(default = "defaults::search_url")]
    pub search_url: String,

    /// Query parameter carrying the search term
    #[serde(default = "defaults::term_param")]
    pub term_param: String,

    /// Query parameter carrying the page index
    #[serde(default = "defaults::page_param")]
    pub page_param: String,

    /// Prefix that turns a listing id into a detail link
    #[serde(default = "defaults::relay_path")]
    pub relay_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            search_url: defaults::search_url(),
            term_param: defaults::term_param(),
            page_param: defaults::page_param(),
            relay_path: defaults::relay_path(),
        }
    }
}

/// CSS selectors describing the search results markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Pagination container
    #[serde(default = "defaults::pagination")]
    pub pagination: String,

    /// One link per page inside the pagination container
    #[serde(default = "defaults::page_link")]
    pub page_link: String,

    /// Repeated listing card
    #[serde(default = "defaults::card")]
    pub card: String,

    /// Card attribute holding the listing id
    #[serde(default = "defaults::id_attr")]
    pub id_attr: String,

    /// Title link inside a card
    #[serde(default = "defaults::title")]
    pub title: String,

    /// Location and requirement block inside a card
    #[serde(default = "defaults::condition")]
    pub condition: String,

    /// Sector summary inside a card
    #[serde(default = "defaults::sector")]
    pub sector: String,

    /// The summary is cut right after the first occurrence of this marker
    #[serde(default = "defaults::summary_marker")]
    pub summary_marker: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            pagination: defaults::pagination(),
            page_link: defaults::page_link(),
            card: defaults::card(),
            id_attr: defaults::id_attr(),
            title: defaults::title(),
            condition: defaults::condition(),
            sector: defaults::sector(),
            summary_marker: defaults::summary_marker(),
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// CSV file path; overwritten on every run
    #[serde(default = "defaults::output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::output_path(),
        }
    }
}

mod defaults {
    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; job-scraper/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        5
    }
    pub fn max_concurrent_cards() -> usize {
        16
    }

    // Site defaults
    pub fn search_url() -> String {
        "https://www.saramin.co.kr/zf_user/search/recruit".into()
    }
    pub fn term_param() -> String {
        "searchword".into()
    }
    pub fn page_param() -> String {
        "recruitPage".into()
    }
    pub fn relay_path() -> String {
        "/zf_user/jobs/relay/view?view_type=search&rec_idx=".into()
    }

    // Selector defaults
    pub fn pagination() -> String {
        ".pagination".into()
    }
    pub fn page_link() -> String {
        "a".into()
    }
    pub fn card() -> String {
        ".item_recruit".into()
    }
    pub fn id_attr() -> String {
        "value".into()
    }
    pub fn title() -> String {
        ".job_tit>a".into()
    }
    pub fn condition() -> String {
        ".job_condition".into()
    }
    pub fn sector() -> String {
        ".job_sector".into()
    }
    pub fn summary_marker() -> String {
        " 외".into()
    }

    // Output defaults
    pub fn output_path() -> String {
        "jobs.csv".into()
    }
}
