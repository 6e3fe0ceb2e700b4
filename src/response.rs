//! Request and response shapes of the audit API.

use crate::audit::AuditReport;
use serde::{Deserialize, Serialize};

/// Placeholder until transit scoring exists.
pub const TRANSIT_SCORE_PLACEHOLDER: u32 = 0;
/// Placeholder until connectivity data exists.
pub const WIFI_SPEED_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResponse {
    pub price: u32,
    pub neighborhood: String,
    pub scam_score: u8,
    pub transit_score: u32,
    pub wifi_speed: String,
    pub description: String,
    /// Present only when the listing could not be retrieved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&AuditReport> for AuditResponse {
    fn from(report: &AuditReport) -> Self {
        let facts = &report.facts;
        Self {
            price: facts.price_or_sentinel(),
            neighborhood: facts.neighborhood_or_sentinel().to_string(),
            scam_score: report.scam_score,
            transit_score: TRANSIT_SCORE_PLACEHOLDER,
            wifi_speed: WIFI_SPEED_PLACEHOLDER.to_string(),
            description: facts.description_or_sentinel().to_string(),
            error: facts.error.clone(),
        }
    }
}

impl From<AuditReport> for AuditResponse {
    fn from(report: AuditReport) -> Self {
        Self::from(&report)
    }
}
