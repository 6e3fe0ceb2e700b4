//! Neighborhood extraction.
//!
//! Strategies run from structured markup towards free text. Earlier ones
//! read dedicated elements and are trusted more; later ones mine prose and
//! titles and are progressively more speculative.

use super::description::extract_description;
use super::tables::{
    INTERSECTION_REGEX, LOCATION_KEYWORDS, NON_LOCATION_TERMS, PAREN_AREA_REGEX,
    PAREN_SUFFIX_REGEX, PLACE_PHRASE_REGEX, UNIT_PREFIX_REGEX,
};
use super::{element_text, first_match, Strategy};
use lazy_static::lazy_static;
use scraper::{Html, Selector};

/// Candidates must be longer than this many characters.
const MIN_LEN: usize = 2;

lazy_static! {
    static ref MAP_ADDRESS_SELECTOR: Selector = Selector::parse(".mapaddress").unwrap();
    static ref TITLE_AREA_SELECTOR: Selector = Selector::parse(".postingtitletext").unwrap();
    static ref SMALL_SELECTOR: Selector = Selector::parse("small").unwrap();
    static ref ATTRIBUTE_SPAN_SELECTOR: Selector = Selector::parse(".attrgroup span").unwrap();
    static ref TITLE_SELECTOR: Selector = Selector::parse("title").unwrap();
    static ref GEO_META_SELECTORS: Vec<Selector> = ["geo.placename", "geo.region"]
        .iter()
        .map(|name| Selector::parse(&format!(r#"meta[name="{name}"]"#)).unwrap())
        .collect();
    static ref BREADCRUMB_LINK_SELECTOR: Selector = Selector::parse(".breadcrumbs a").unwrap();
}

pub const NEIGHBORHOOD_CHAIN: &[Strategy<String>] = &[
    Strategy { name: "map address", run: map_address },
    Strategy { name: "title annotation", run: title_annotation },
    Strategy { name: "description text", run: description_text },
    Strategy { name: "attribute keywords", run: attribute_keywords },
    Strategy { name: "page title", run: page_title },
    Strategy { name: "geo meta", run: geo_meta },
    Strategy { name: "breadcrumbs", run: breadcrumbs },
];

/// Best-effort neighborhood, or `None` when every strategy misses.
pub fn extract_neighborhood(document: &Html) -> Option<String> {
    let (strategy, neighborhood) = first_match(document, NEIGHBORHOOD_CHAIN)?;
    tracing::debug!(strategy, %neighborhood, "neighborhood extracted");
    Some(neighborhood)
}

fn long_enough(candidate: String) -> Option<String> {
    (candidate.chars().count() > MIN_LEN).then_some(candidate)
}

/// Geocoded address block shown above the map.
fn map_address(document: &Html) -> Option<String> {
    let element = document.select(&MAP_ADDRESS_SELECTOR).next()?;
    long_enough(element_text(element))
}

/// `<small> (kitsilano)</small>` nested in the posting title.
fn title_annotation(document: &Html) -> Option<String> {
    let title_area = document.select(&TITLE_AREA_SELECTOR).next()?;
    let small = title_area.select(&SMALL_SELECTOR).next()?;
    let hint = element_text(small)
        .trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace())
        .to_string();
    long_enough(hint)
}

/// Area names, intersections and place phrases mentioned in the body.
fn description_text(document: &Html) -> Option<String> {
    let description = extract_description(document)?;

    [&*PAREN_AREA_REGEX, &*INTERSECTION_REGEX, &*PLACE_PHRASE_REGEX]
        .into_iter()
        .find_map(|pattern| pattern.captures(&description))
        .map(|caps| caps[1].trim().to_string())
}

fn attribute_keywords(document: &Html) -> Option<String> {
    document
        .select(&ATTRIBUTE_SPAN_SELECTOR)
        .map(element_text)
        .find(|text| {
            let lower = text.to_lowercase();
            !NON_LOCATION_TERMS.iter().any(|term| lower.contains(term))
                && !UNIT_PREFIX_REGEX.is_match(&lower)
                && LOCATION_KEYWORDS.iter().any(|keyword| lower.contains(keyword.as_str()))
        })
}

/// Leading segment of "<segment> - <site section> - <site>".
fn page_title(document: &Html) -> Option<String> {
    let title = element_text(document.select(&TITLE_SELECTOR).next()?);
    let leading = title.split_once(" - ").map_or(title.as_str(), |(head, _)| head);
    let stripped = PAREN_SUFFIX_REGEX.replace(leading, "");
    long_enough(stripped.trim().to_string())
}

/// `geo.placename`, then `geo.region`; content is taken verbatim.
fn geo_meta(document: &Html) -> Option<String> {
    GEO_META_SELECTORS.iter().find_map(|selector| {
        document
            .select(selector)
            .next()?
            .value()
            .attr("content")
            .filter(|content| !content.trim().is_empty())
            .map(str::to_string)
    })
}

/// Last link of a breadcrumb trail with at least two links.
fn breadcrumbs(document: &Html) -> Option<String> {
    let links: Vec<String> = document.select(&BREADCRUMB_LINK_SELECTOR).map(element_text).collect();
    if links.len() < 2 {
        return None;
    }
    links.last().filter(|text| !text.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighborhood_of(html: &str) -> Option<String> {
        extract_neighborhood(&Html::parse_document(html))
    }

    #[test]
    fn test_map_address_beats_title_annotation() {
        let html = r#"
            <span class="postingtitletext">Suite <small> (kitsilano)</small></span>
            <div class="mapaddress">2150 W 4th Ave</div>
        "#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("2150 W 4th Ave"));
    }

    #[test]
    fn test_short_map_address_is_skipped() {
        let html = r#"
            <div class="mapaddress"> BC </div>
            <span class="postingtitletext">Suite <small> (kitsilano)</small></span>
        "#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("kitsilano"));
    }

    #[test]
    fn test_small_outside_title_area_is_ignored() {
        let html = r#"
            <span class="postingtitletext">Suite</span>
            <small>(gastown)</small>
        "#;
        assert_eq!(neighborhood_of(html), None);
    }

    #[test]
    fn test_description_parenthesized_area() {
        let html = r#"<section id="postingbody">Top floor unit (Fairview Heights) near transit.</section>"#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("Fairview Heights"));
    }

    #[test]
    fn test_description_intersection() {
        let html = r#"<section id="postingbody">Corner of 10th Ave & Main St, quiet building.</section>"#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("10th Ave & Main St"));
    }

    #[test]
    fn test_description_place_phrase() {
        let html = r#"<section id="postingbody">Spacious studio in Mount Pleasant, close to shops.</section>"#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("Mount Pleasant"));
    }

    #[test]
    fn test_description_patterns_tried_in_priority_order() {
        let html = r#"<section id="postingbody">
            Steps from 4th Ave and Burrard St in Kitsilano (Kits Point Area).
        </section>"#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("Kits Point Area"));
    }

    #[test]
    fn test_attribute_scan_skips_amenities_and_units() {
        let html = r#"
            <div class="attrgroup">
                <span>1BR / 1Ba</span>
                <span>laundry in bldg</span>
                <span>#304 north tower</span>
                <span>close to downtown</span>
            </div>
        "#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("close to downtown"));
    }

    #[test]
    fn test_attribute_scan_stoplist_wins_over_location_words() {
        let html = r#"
            <div class="attrgroup"><span>apartment west side</span></div>
        "#;
        assert_eq!(neighborhood_of(html), None);
    }

    #[test]
    fn test_page_title_leading_segment() {
        let html = r#"
            <html><head><title>Cozy garden suite (kerrisdale) - apts/housing for rent - craigslist</title></head></html>
        "#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("Cozy garden suite"));
    }

    #[test]
    fn test_geo_meta() {
        let html = r#"<html><head><meta name="geo.placename" content="Burnaby"></head></html>"#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("Burnaby"));
    }

    #[test]
    fn test_geo_region_when_placename_missing() {
        let html = r#"<html><head><meta name="geo.region" content="CA-BC"></head></html>"#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("CA-BC"));
    }

    #[test]
    fn test_geo_placename_preferred_over_region() {
        let html = r#"<html><head>
            <meta name="geo.region" content="CA-BC">
            <meta name="geo.placename" content="Burnaby">
        </head></html>"#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("Burnaby"));
    }

    #[test]
    fn test_breadcrumbs_last_resort() {
        let html = r#"
            <ul class="breadcrumbs">
                <li><a href="/">vancouver</a></li>
                <li><a href="/van">city of vancouver</a></li>
            </ul>
        "#;
        assert_eq!(neighborhood_of(html).as_deref(), Some("city of vancouver"));
    }

    #[test]
    fn test_single_breadcrumb_is_not_enough() {
        let html = r#"<ul class="breadcrumbs"><li><a href="/">vancouver</a></li></ul>"#;
        assert_eq!(neighborhood_of(html), None);
    }
}
