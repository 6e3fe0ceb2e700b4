//! # listing-audit
//!
//! Extracts structured facts from a single rental-listing page and scores
//! how trustworthy the listing looks.
//!
//! ## Pipeline
//!
//! - **Fetch**: `fetcher` retrieves raw HTML; failures become data, not errors
//! - **Extract**: `extract` runs ordered fallback strategies per field
//! - **Score**: `score` applies a fixed rule list, clamped to `[0, 100]`
//! - **Respond**: `response` maps the report onto the API shape served by `server`

pub mod audit;
pub mod config;
pub mod extract;
pub mod facts;
pub mod fetcher;
pub mod listings;
pub mod response;
pub mod score;
pub mod server;

pub use audit::{audit_html, audit_url, AuditReport};
pub use config::Config;
pub use facts::ListingFacts;
pub use fetcher::{FetchError, HttpFetcher, PageFetcher};
pub use response::{AuditRequest, AuditResponse};
