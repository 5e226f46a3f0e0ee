//! Job listing data structures.

use crate::error::ExtractError;
use crate::utils::text::{normalize_whitespace, truncate_after, whitespace_tokens};

/// Tokens the condition field must provide: location (2) and requirement (2).
pub const CONDITION_TOKENS: usize = 4;

/// Column names of the CSV output, in order.
pub const CSV_HEADERS: [&str; 5] = ["LINK", "Title", "Location", "Need", "Summary"];

/// One job listing extracted from a search results card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedJob {
    /// Listing identifier used to build the relay link
    pub id: String,

    /// Job title
    pub title: String,

    /// Location, e.g. "서울 강남구"
    pub location: String,

    /// Experience/education requirement, e.g. "경력3년↑ 대학교(4년)↑"
    pub need: String,

    /// Sector summary, cut after the "and others" marker
    pub summary: String,
}

impl ExtractedJob {
    /// Detail link for this listing.
    pub fn link(&self, relay_path: &str) -> String {
        format!("{relay_path}{}", self.id)
    }

    /// CSV row matching [`CSV_HEADERS`].
    pub fn to_record(&self, relay_path: &str) -> [String; 5] {
        [
            self.link(relay_path),
            self.title.clone(),
            self.location.clone(),
            self.need.clone(),
            self.summary.clone(),
        ]
    }
}

/// Raw text read from one listing card, before any cleanup.
///
/// Parsed documents cannot leave the thread that parsed them, so cards are
/// copied into this owned form before extraction is fanned out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub condition: String,
    pub sector: String,
}

impl ListingCard {
    /// Build an [`ExtractedJob`] from the raw card text.
    ///
    /// The condition text must split into at least [`CONDITION_TOKENS`]
    /// whitespace tokens; anything past the fourth is ignored.
    pub fn extract(&self, summary_marker: &str) -> Result<ExtractedJob, ExtractError> {
        let condition = whitespace_tokens(&self.condition);
        if condition.len() < CONDITION_TOKENS {
            return Err(ExtractError::Condition {
                found: condition.len(),
                expected: CONDITION_TOKENS,
            });
        }

        let summary = normalize_whitespace(&self.sector);

        Ok(ExtractedJob {
            id: self.id.clone(),
            title: normalize_whitespace(&self.title),
            location: format!("{} {}", condition[0], condition[1]),
            need: format!("{} {}", condition[2], condition[3]),
            summary: truncate_after(&summary, summary_marker).to_string(),
        })
    }
}
