//! Aggregation and ranking of fetched listings.
//!
//! A single pass over the merged listings of every keyword:
//!
//! 1. Drop identifiers already seen (first occurrence wins)
//! 2. Normalize the body and drop anything shorter than `min_text_chars`
//! 3. Score, dropping zero scores
//! 4. Attach snippet and reference URL
//! 5. Stable sort by score descending, truncate to `top_n`

use url::Url;

use crate::config::ScanConfig;
use crate::error::MatchError;
use crate::normalize::{normalize_text, truncate_chars};
use crate::types::{RawListing, ScoredListing};

use super::dedup::SeenIds;
use super::scoring::Scorer;

/// Ranked listings plus the number of distinct identifiers encountered.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub listings: Vec<ScoredListing>,
    pub unique: usize,
}

/// Score, filter and rank `listings`, which must already be in keyword order.
///
/// # Errors
///
/// Returns [`MatchError::Config`] if `config.item_url_base` is not a valid URL.
pub fn aggregate<I>(
    listings: I,
    scorer: &Scorer,
    config: &ScanConfig,
) -> Result<Aggregation, MatchError>
where
    I: IntoIterator<Item = RawListing>,
{
    let mut seen = SeenIds::new();
    let mut candidates = Vec::new();

    for raw in listings {
        // Marked seen before any filter: a later copy never gets a second chance.
        if !seen.first_sighting(&raw.id) {
            tracing::trace!(id = %raw.id, "duplicate listing dropped");
            continue;
        }

        let text = normalize_text(Some(&raw.body));
        if text.chars().count() < config.min_text_chars {
            continue;
        }

        let outcome = scorer.score(&text);
        if outcome.score == 0 {
            continue;
        }

        let url = item_url(&config.item_url_base, &raw.id)?;
        candidates.push(ScoredListing {
            snippet: truncate_chars(&text, config.snippet_chars).to_owned(),
            url,
            score: outcome.score,
            matched_skills: outcome.matched_skills,
            id: raw.id,
            author: raw.author,
            created_at: raw.created_at,
        });
    }

    tracing::debug!(
        unique = seen.len(),
        candidates = candidates.len(),
        "listings aggregated"
    );

    Ok(Aggregation {
        listings: rank(candidates, config.top_n),
        unique: seen.len(),
    })
}

/// Sort by score descending and keep the first `top_n`.
///
/// The sort is stable: listings with equal scores keep their insertion order.
pub fn rank(mut candidates: Vec<ScoredListing>, top_n: usize) -> Vec<ScoredListing> {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(top_n);
    candidates
}

/// Build the reference link for listing `id`, e.g. `.../item?id=38842977`.
///
/// # Errors
///
/// Returns [`MatchError::Config`] if `base` is not a valid URL.
pub fn item_url(base: &str, id: &str) -> Result<String, MatchError> {
    Url::parse_with_params(base, &[("id", id)])
        .map(String::from)
        .map_err(|e| MatchError::Config(format!("invalid item_url_base {base}: {e}")))
}
