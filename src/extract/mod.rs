//! Field extraction from a parsed listing page.
//!
//! Each field is produced by an ordered chain of independent strategies.
//! A strategy returns `None` to pass to the next one; the first `Some` wins.

pub mod description;
pub mod neighborhood;
pub mod price;
pub mod tables;

use crate::facts::ListingFacts;
use scraper::{ElementRef, Html};

/// A named extraction strategy over a parsed document.
pub struct Strategy<T> {
    pub name: &'static str,
    pub run: fn(&Html) -> Option<T>,
}

/// Run strategies in order and return the first hit with its strategy name.
pub fn first_match<T>(document: &Html, chain: &[Strategy<T>]) -> Option<(&'static str, T)> {
    chain
        .iter()
        .find_map(|strategy| (strategy.run)(document).map(|value| (strategy.name, value)))
}

/// Parse raw HTML and extract all listing fields.
pub fn extract_facts(url: &str, html: &str) -> ListingFacts {
    let document = Html::parse_document(html);

    let price = price::extract_price(&document);
    let description = description::extract_description(&document);
    let neighborhood = neighborhood::extract_neighborhood(&document);

    ListingFacts::extracted(url, price, description, neighborhood)
}

/// Concatenated text of an element, trimmed at both ends.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
