//! ListingFacts - the normalized record extracted from one listing page.

use serde::Serialize;

/// Sentinel reported for a price that could not be found.
pub const UNKNOWN_PRICE: u32 = 0;

/// Sentinel reported for a neighborhood that could not be found.
pub const UNKNOWN_NEIGHBORHOOD: &str = "Unknown";

/// Facts extracted from a single listing.
///
/// Missing fields are kept as `None` internally; the literal sentinels
/// (`0`, `""`, `"Unknown"`) only appear through the `*_or_sentinel`
/// accessors used at the response boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingFacts {
    /// The source URL, opaque to the pipeline
    pub url: String,
    /// Asking price in whole currency units
    pub price: Option<u32>,
    /// Trimmed body text of the posting
    pub description: Option<String>,
    /// Best-effort neighborhood or area name
    pub neighborhood: Option<String>,
    /// Retrieval error; extraction never ran when this is set
    pub error: Option<String>,
}

impl ListingFacts {
    /// Facts for a page that was fetched and parsed.
    pub fn extracted(
        url: impl Into<String>,
        price: Option<u32>,
        description: Option<String>,
        neighborhood: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            price: price.filter(|p| *p > 0),
            description: description.filter(|d| !d.is_empty()),
            neighborhood: neighborhood.filter(|n| !n.trim().is_empty()),
            error: None,
        }
    }

    /// Facts for a page that could not be retrieved.
    pub fn fetch_failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            price: None,
            description: None,
            neighborhood: None,
            error: Some(error.into()),
        }
    }

    pub fn is_fetch_failure(&self) -> bool {
        self.error.is_some()
    }

    pub fn price_or_sentinel(&self) -> u32 {
        self.price.unwrap_or(UNKNOWN_PRICE)
    }

    pub fn description_or_sentinel(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn neighborhood_or_sentinel(&self) -> &str {
        self.neighborhood.as_deref().unwrap_or(UNKNOWN_NEIGHBORHOOD)
    }
}
