//! Core scan orchestrator: keyword fan-out, ordered merge, aggregate, rank.
//!
//! Every keyword is queried through the same [`ListingSource`]. Queries run
//! concurrently, but [`futures::future::join_all`] yields outcomes in keyword
//! order, so the merge (and therefore which duplicate wins) is identical to a
//! sequential run.

use crate::config::ScanConfig;
use crate::error::MatchError;
use crate::source::ListingSource;
use crate::types::{FetchOutcome, ScanReport};

use super::aggregate::aggregate;
use super::scoring::Scorer;

/// Orchestrate a scan across all configured keywords.
///
/// # Pipeline
///
/// 1. Compile the scorer from `config.skills`
/// 2. Query every keyword concurrently with [`futures::future::join_all`]
/// 3. Convert each result into a [`FetchOutcome`], logging failures at warn level
/// 4. Merge listings in keyword order
/// 5. Deduplicate, filter, score, sort and truncate via [`aggregate`]
///
/// # Errors
///
/// Per-keyword fetch failures never fail the scan. Only an invalid
/// configuration (uncompilable skill phrase, bad item URL base) does.
pub async fn orchestrate_scan<S: ListingSource>(
    source: &S,
    config: &ScanConfig,
) -> Result<ScanReport, MatchError> {
    let scorer = Scorer::new(config.skills.as_slice())?;

    let outcomes = fetch_all(source, config).await;

    let mut failed_keywords = Vec::new();
    let mut fetched = 0;
    let mut merged = Vec::new();
    for outcome in outcomes {
        if outcome.is_failed() {
            failed_keywords.push(outcome.keyword().to_owned());
        }
        fetched += outcome.listings().len();
        merged.extend(outcome.into_listings());
    }

    let aggregation = aggregate(merged, &scorer, config)?;

    tracing::info!(
        keywords = config.keywords.len(),
        failed = failed_keywords.len(),
        fetched,
        unique = aggregation.unique,
        ranked = aggregation.listings.len(),
        "scan complete"
    );

    Ok(ScanReport {
        listings: aggregation.listings,
        keywords_queried: config.keywords.len(),
        failed_keywords,
        fetched,
        unique: aggregation.unique,
    })
}

/// Query every keyword and return one outcome per keyword, in keyword order.
pub async fn fetch_all<S: ListingSource>(source: &S, config: &ScanConfig) -> Vec<FetchOutcome> {
    let futures: Vec<_> = config
        .keywords
        .iter()
        .map(|keyword| fetch_keyword(source, keyword, config.limit_per_keyword))
        .collect();

    futures::future::join_all(futures).await
}

/// Query one keyword, downgrading any error to [`FetchOutcome::Failed`].
async fn fetch_keyword<S: ListingSource>(
    source: &S,
    keyword: &str,
    limit: usize,
) -> FetchOutcome {
    match source.fetch(keyword, limit).await {
        Ok(listings) => {
            tracing::debug!(
                source = source.name(),
                keyword,
                count = listings.len(),
                "keyword fetched"
            );
            FetchOutcome::Fetched {
                keyword: keyword.to_owned(),
                listings,
            }
        }
        Err(err) => {
            tracing::warn!(
                source = source.name(),
                keyword,
                error = %err,
                "fetch failed for keyword"
            );
            FetchOutcome::Failed {
                keyword: keyword.to_owned(),
                reason: err.to_string(),
            }
        }
    }
}
