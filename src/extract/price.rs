//! Asking price extraction.

use super::tables::{PAGE_PRICE_REGEX, REGION_PRICE_REGEX};
use super::{element_text, first_match, Strategy};
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};

lazy_static! {
    static ref PRICE_SELECTOR: Selector = Selector::parse(".price").unwrap();
    static ref TITLE_SELECTOR: Selector = Selector::parse(".postingtitletext").unwrap();
    static ref ATTRIBUTES_SELECTOR: Selector = Selector::parse(".attrgroup").unwrap();
}

/// Price strategies, most specific region first.
pub const PRICE_CHAIN: &[Strategy<u32>] = &[
    Strategy { name: "price region", run: price_region },
    Strategy { name: "title region", run: title_region },
    Strategy { name: "attribute region", run: attribute_region },
    Strategy { name: "whole page", run: whole_page },
];

/// Extract the asking price, or `None` when no strategy finds one.
pub fn extract_price(document: &Html) -> Option<u32> {
    let (strategy, price) = first_match(document, PRICE_CHAIN)?;
    tracing::debug!(strategy, price, "price extracted");
    Some(price)
}

fn price_region(document: &Html) -> Option<u32> {
    first_price_in_region(document, &PRICE_SELECTOR)
}

fn title_region(document: &Html) -> Option<u32> {
    first_price_in_region(document, &TITLE_SELECTOR)
}

fn attribute_region(document: &Html) -> Option<u32> {
    first_price_in_region(document, &ATTRIBUTES_SELECTOR)
}

/// Scan the full page text when no marked region carries a price.
fn whole_page(document: &Html) -> Option<u32> {
    let text = document.root_element().text().collect::<String>();
    first_price(&PAGE_PRICE_REGEX, &text)
}

/// Only the first element matching `selector` is considered.
fn first_price_in_region(document: &Html, selector: &Selector) -> Option<u32> {
    let region = document.select(selector).next()?;
    first_price(&REGION_PRICE_REGEX, &element_text(region))
}

/// A "$0" amount counts as a miss so later strategies still run.
fn first_price(pattern: &Regex, text: &str) -> Option<u32> {
    let caps = pattern.captures(text)?;
    parse_amount(&caps[1]).filter(|price| *price > 0)
}

/// "1,850" -> 1850
fn parse_amount(raw: &str) -> Option<u32> {
    raw.replace(',', "").parse().ok()
}
