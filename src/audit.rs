//! Audit pipeline: fetch, extract, score.

use crate::extract::extract_facts;
use crate::facts::ListingFacts;
use crate::fetcher::PageFetcher;
use crate::score::score;
use serde::Serialize;

/// Extracted facts with their trust score attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub facts: ListingFacts,
    pub scam_score: u8,
}

impl AuditReport {
    pub fn from_facts(facts: ListingFacts) -> Self {
        let scam_score = score(&facts);
        Self { facts, scam_score }
    }
}

/// Extract and score an already retrieved page.
pub fn audit_html(url: &str, html: &str) -> AuditReport {
    AuditReport::from_facts(extract_facts(url, html))
}

/// Retrieve and audit a listing. Retrieval failures become data on the
/// report instead of errors; extraction is skipped for them.
pub async fn audit_url(fetcher: &dyn PageFetcher, url: &str) -> AuditReport {
    tracing::debug!(url, "fetching listing");

    let report = match fetcher.fetch(url).await {
        Ok(html) => audit_html(url, &html),
        Err(e) => {
            tracing::warn!(url, error = %e, "listing fetch failed");
            AuditReport::from_facts(ListingFacts::fetch_failed(url, e.to_string()))
        }
    };

    tracing::info!(
        url,
        price = report.facts.price_or_sentinel(),
        neighborhood = report.facts.neighborhood_or_sentinel(),
        scam_score = report.scam_score,
        "listing audited"
    );
    report
}
