//! Heuristic trust scoring over extracted listing facts.
//!
//! Higher is safer. Keyword penalties stack without a cap before the final
//! clamp, so a description with many red flags bottoms out at zero.

use crate::extract::tables::SCAM_KEYWORDS;
use crate::facts::ListingFacts;

pub const MAX_SCORE: i32 = 100;
pub const KEYWORD_PENALTY: i32 = 15;
pub const LOW_PRICE_PENALTY: i32 = 30;
/// Known prices strictly below this are treated as a red flag.
pub const LOW_PRICE_THRESHOLD: u32 = 500;

/// Scam keywords found in `description`, in table order.
pub fn matched_keywords(description: &str) -> Vec<&'static str> {
    let lowered = description.to_lowercase();
    SCAM_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect()
}

/// Score a listing in `[0, 100]`.
pub fn score(facts: &ListingFacts) -> u8 {
    let mut score = MAX_SCORE;

    let keywords = matched_keywords(facts.description_or_sentinel());
    score -= KEYWORD_PENALTY * keywords.len() as i32;

    if let Some(price) = facts.price {
        if price > 0 && price < LOW_PRICE_THRESHOLD {
            score -= LOW_PRICE_PENALTY;
        }
    }

    score.clamp(0, MAX_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(price: Option<u32>, description: &str) -> ListingFacts {
        ListingFacts::extracted(
            "https://example.org/listing",
            price,
            Some(description.to_string()),
            None,
        )
    }

    #[test]
    fn test_clean_listing_scores_full() {
        assert_eq!(score(&facts(Some(1800), "Bright suite, no pets.")), 100);
    }

    #[test]
    fn test_three_keywords_without_price() {
        let description =
            "Contact me on WhatsApp, payment by Western Union. I am currently out of the country.";
        assert_eq!(
            matched_keywords(description),
            vec!["whatsapp", "western union", "currently out"]
        );
        assert_eq!(score(&facts(None, description)), 55);
    }

    #[test]
    fn test_low_price_penalty() {
        assert_eq!(score(&facts(Some(400), "Nice room.")), 70);
    }

    #[test]
    fn test_price_at_threshold_is_not_penalized() {
        assert_eq!(score(&facts(Some(500), "Nice room.")), 100);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        assert_eq!(score(&facts(None, "urgent urgent URGENT")), 85);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let description = "URGENT: I am overseas, out of town, god bless. \
                           Send money by wire transfer or money order, whatsapp me.";
        assert!(matched_keywords(description).len() >= 7);
        assert_eq!(score(&facts(Some(300), description)), 0);
    }

    #[test]
    fn test_fetch_failure_scores_full() {
        let failed = ListingFacts::fetch_failed("https://example.org/x", "timed out");
        assert_eq!(score(&failed), 100);
    }
}
