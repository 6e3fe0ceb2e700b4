//! Bulk lister for search-results pages.
//!
//! Independent of the audit pipeline: reads each result card's title,
//! displayed price text and link.

use lazy_static::lazy_static;
use scraper::{Html, Selector};
use std::fmt;

lazy_static! {
    static ref RESULT_SELECTOR: Selector = Selector::parse("li.cl-static-search-result").unwrap();
    static ref PRICE_SELECTOR: Selector = Selector::parse("div.price").unwrap();
    static ref LINK_SELECTOR: Selector = Selector::parse("a").unwrap();
}

/// One search result card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    /// Price as displayed, e.g. "$1,200"
    pub price: Option<String>,
    pub url: String,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "【{}】 {}", self.price.as_deref().unwrap_or("unknown"), self.title)?;
        write!(f, "URL: {}", self.url)
    }
}

/// Parse every result card; cards without a link are skipped.
pub fn parse_search_results(html: &str) -> Vec<SearchResult> {
    let document = Html::parse_document(html);

    document
        .select(&RESULT_SELECTOR)
        .filter_map(|card| {
            let url = card
                .select(&LINK_SELECTOR)
                .next()?
                .value()
                .attr("href")?
                .to_string();
            let title = card.value().attr("title").unwrap_or_default().to_string();
            let price = card
                .select(&PRICE_SELECTOR)
                .next()
                .map(|p| p.text().collect::<String>().trim().to_string())
                .filter(|p| !p.is_empty());

            Some(SearchResult { title, price, url })
        })
        .collect()
}
