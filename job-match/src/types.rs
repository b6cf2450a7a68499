//! Core types for fetched listings, scored listings and scan outcomes.

use serde::{Deserialize, Serialize};

/// A single comment returned by a listing source, before any scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListing {
    /// Source identifier, unique per source.
    pub id: String,
    /// Raw body, possibly containing HTML markup.
    pub body: String,
    /// Author handle, empty when the source omits it.
    pub author: String,
    /// Creation timestamp as reported by the source.
    pub created_at: String,
}

/// A listing that passed every filter, with its score and display fields.
///
/// Field names are the on-disk JSON names of the per-day results file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredListing {
    /// Source identifier.
    pub id: String,
    /// Relevance score; always greater than zero for reported listings.
    pub score: u32,
    /// Matched skill phrases, in skill-set order.
    pub matched_skills: Vec<String>,
    /// Leading excerpt of the normalized body.
    pub snippet: String,
    /// Link to the listing's discussion page.
    pub url: String,
    /// Author handle.
    pub author: String,
    /// Creation timestamp as reported by the source.
    pub created_at: String,
}

/// Outcome of querying the source for one keyword.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The query succeeded; listings are in source order.
    Fetched {
        keyword: String,
        listings: Vec<RawListing>,
    },
    /// The query failed and contributes no listings.
    Failed { keyword: String, reason: String },
}

impl FetchOutcome {
    /// The keyword this outcome belongs to.
    pub fn keyword(&self) -> &str {
        match self {
            Self::Fetched { keyword, .. } | Self::Failed { keyword, .. } => keyword,
        }
    }

    /// Listings carried by this outcome; empty for a failure.
    pub fn listings(&self) -> &[RawListing] {
        match self {
            Self::Fetched { listings, .. } => listings,
            Self::Failed { .. } => &[],
        }
    }

    /// Consumes the outcome, yielding its listings; empty for a failure.
    pub fn into_listings(self) -> Vec<RawListing> {
        match self {
            Self::Fetched { listings, .. } => listings,
            Self::Failed { .. } => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Result of a whole scan: the ranked listings plus run counters.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Ranked, truncated listings.
    pub listings: Vec<ScoredListing>,
    /// Number of keywords queried.
    pub keywords_queried: usize,
    /// Keywords whose query failed.
    pub failed_keywords: Vec<String>,
    /// Listings returned by the source across all keywords, duplicates included.
    pub fetched: usize,
    /// Distinct identifiers seen.
    pub unique: usize,
}
