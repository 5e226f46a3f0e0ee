// src/services/extractor.rs

//! Listing card extraction.

use scraper::Html;

use crate::error::ExtractError;
use crate::models::{ExtractedJob, ListingCard, SelectorConfig};

use super::Selectors;

/// Turns listing cards into [`ExtractedJob`] records.
#[derive(Debug, Clone)]
pub struct JobExtractor {
    selectors: Selectors,
    summary_marker: String,
}

impl JobExtractor {
    pub fn new(selectors: Selectors, summary_marker: impl Into<String>) -> Self {
        Self {
            selectors,
            summary_marker: summary_marker.into(),
        }
    }

    /// Compile selectors and take the summary marker from the same config.
    pub fn from_config(config: &SelectorConfig) -> crate::error::Result<Self> {
        Ok(Self::new(
            Selectors::compile(config)?,
            config.summary_marker.clone(),
        ))
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    pub fn summary_marker(&self) -> &str {
        &self.summary_marker
    }

    /// Parse a results page and snapshot every listing card on it.
    pub fn read_cards(&self, html: &str) -> Vec<ListingCard> {
        let document = Html::parse_document(html);
        self.selectors
            .cards(&document)
            .map(|card| self.selectors.read_card(&card))
            .collect()
    }

    /// Build one record from a card snapshot.
    pub fn extract(&self, card: &ListingCard) -> Result<ExtractedJob, ExtractError> {
        card.extract(&self.summary_marker)
    }
}
