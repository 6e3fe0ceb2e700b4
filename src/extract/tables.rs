//! Static keyword tables and compiled patterns shared by the extractors
//! and the scorer. Built once per process.

use lazy_static::lazy_static;
use regex::Regex;

/// Phrases whose presence in a description lowers the trust score.
pub const SCAM_KEYWORDS: &[&str] = &[
    // communication redirects
    "whatsapp",
    "western union",
    // payment redirects
    "wire transfer",
    "money order",
    "send money",
    "deposit first",
    "shipping",
    // urgency / absentee landlord
    "urgent",
    "currently out",
    "out of town",
    "out of country",
    "cant meet",
    "can't meet",
    // generic fraud markers
    "overseas",
    "nigeria",
    "god bless",
];

/// Regional place names, most specific first where one contains another.
pub const PLACE_NAMES: &[&str] = &[
    "North Vancouver",
    "West Vancouver",
    "East Vancouver",
    "New Westminster",
    "Port Coquitlam",
    "Port Moody",
    "Mount Pleasant",
    "Point Grey",
    "West End",
    "Commercial Drive",
    "Main Street",
    "Vancouver",
    "Burnaby",
    "Richmond",
    "Surrey",
    "Coquitlam",
    "Delta",
    "Langley",
    "Kitsilano",
    "Yaletown",
    "Gastown",
    "Coal Harbour",
    "Chinatown",
    "Strathcona",
    "Fairview",
    "Kerrisdale",
    "Marpole",
    "Dunbar",
    "Shaughnessy",
    "Oakridge",
    "Kensington",
    "Hastings",
    "Metrotown",
    "Brentwood",
    "Lonsdale",
    "Downtown",
    "UBC",
];

/// Attribute terms that describe the unit rather than its location.
pub const NON_LOCATION_TERMS: &[&str] = &[
    "bedroom",
    "bathroom",
    "bath",
    "furnished",
    "laundry",
    "w/d",
    "parking",
    "garage",
    "carport",
    "ev charging",
    "cats",
    "dogs",
    "smoking",
    "wheelchair",
    "air conditioning",
    "dishwasher",
    "balcony",
    "lease",
    "month",
    "available",
    "apartment",
    "condo",
    "townhouse",
    "duplex",
    "house",
    "ft2",
];

/// Directional and area words that mark an attribute as a location.
pub const LOCATION_TERMS: &[&str] = &[
    "downtown",
    "north",
    "south",
    "east",
    "west",
    "central",
    "district",
    "village",
    "heights",
    "area",
    "neighborhood",
    "neighbourhood",
];

lazy_static! {
    /// Lowercased place names plus location words, for attribute scanning.
    pub static ref LOCATION_KEYWORDS: Vec<String> = PLACE_NAMES
        .iter()
        .map(|p| p.to_lowercase())
        .chain(LOCATION_TERMS.iter().map(|t| t.to_string()))
        .collect();

    // "$1,850" or "$1850" inside a known price region; separators are stripped later
    pub static ref REGION_PRICE_REGEX: Regex = Regex::new(
        r"\$([0-9][0-9,]*)"
    ).unwrap();

    // Whole-page fallback: 1-2 leading digits, optional comma, 3 trailing digits
    pub static ref PAGE_PRICE_REGEX: Regex = Regex::new(
        r"\$([0-9]{1,2},?[0-9]{3})"
    ).unwrap();

    // "(Fairview Heights)", "(Collingwood Village)"
    pub static ref PAREN_AREA_REGEX: Regex = Regex::new(
        r"\(([A-Z][A-Za-z' ]*?(?:[Aa]rea|[Vv]illage|[Hh]eights|[Dd]istrict))\)"
    ).unwrap();

    // "4th Ave and Burrard St", "W 10th Avenue & Main"
    pub static ref INTERSECTION_REGEX: Regex = Regex::new(
        r"\b((?:[NSEW]\.?\s+)?[0-9]+(?:st|nd|rd|th)\s+(?:Avenue|Ave|Street|St|Road|Rd|Boulevard|Blvd|Drive|Dr)\.?\s+(?:and|&)\s+[A-Z][a-z]+(?:\s+(?:Avenue|Ave|Street|St|Road|Rd|Boulevard|Blvd|Drive|Dr)\b)?)"
    ).unwrap();

    // "in Downtown Vancouver", "near Kitsilano"
    pub static ref PLACE_PHRASE_REGEX: Regex = Regex::new(&format!(
        r"\b(?:in|at|near)\s+((?:[A-Z][a-z]+\s+)*(?:{}))\b",
        PLACE_NAMES
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|")
    ))
    .unwrap();

    // Attribute spans that open with a price, unit number or room count
    pub static ref UNIT_PREFIX_REGEX: Regex = Regex::new(
        r"^(?:\$|#|[0-9]|unit\b|apt\b|suite\b)"
    ).unwrap();

    // Trailing "(...)" annotation on a title segment
    pub static ref PAREN_SUFFIX_REGEX: Regex = Regex::new(
        r"\s*\([^()]*\)\s*$"
    ).unwrap();
}
