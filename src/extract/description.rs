//! Posting body extraction.

use super::element_text;
use lazy_static::lazy_static;
use scraper::{Html, Selector};

lazy_static! {
    static ref POSTING_BODY_SELECTOR: Selector = Selector::parse("#postingbody").unwrap();
    static ref BODY_CLASS_SELECTOR: Selector = Selector::parse(".body").unwrap();
}

/// Visible text of the posting body, trimmed at both ends.
pub fn extract_description(document: &Html) -> Option<String> {
    document
        .select(&POSTING_BODY_SELECTOR)
        .next()
        .or_else(|| document.select(&BODY_CLASS_SELECTOR).next())
        .map(element_text)
        .filter(|text| !text.is_empty())
}
