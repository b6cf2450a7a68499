//! # job-match
//!
//! Fetch Hacker News comments matching job-search keywords, score each one
//! against a skill list, and return the best matches.
//!
//! ## Design
//!
//! - Queries the public Algolia Hacker News API, one request per keyword
//! - Keyword queries run concurrently and are merged back in keyword order
//! - Duplicate comments across keywords are collapsed, first occurrence wins
//! - Scoring is a pure function of the normalized text and the skill set
//! - Graceful degradation: a failing keyword is logged and contributes nothing
//!
//! Filesystem output and terminal rendering live in the `job-scanner` crate;
//! this crate only fetches and ranks.

pub mod config;
pub mod error;
pub mod http;
pub mod normalize;
pub mod orchestrator;
pub mod source;
pub mod sources;
pub mod types;

pub use config::ScanConfig;
pub use error::{MatchError, Result};
pub use orchestrator::scoring::{ScoreOutcome, Scorer};
pub use source::ListingSource;
pub use sources::HackerNewsSource;
pub use types::{FetchOutcome, RawListing, ScanReport, ScoredListing};

/// Scan Hacker News for every keyword in `config` and rank the results.
///
/// Builds a [`HackerNewsSource`] from `config` and runs the full pipeline.
///
/// # Errors
///
/// Returns [`MatchError::Config`] if `config` is invalid, or
/// [`MatchError::Http`] if the HTTP client cannot be built. Failures of
/// individual keyword queries are logged and never returned.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> job_match::Result<()> {
/// let config = job_match::ScanConfig::default();
/// let report = job_match::scan(&config).await?;
/// for listing in &report.listings {
///     println!("{} {}", listing.score, listing.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn scan(config: &ScanConfig) -> Result<ScanReport> {
    config.validate()?;
    let source = HackerNewsSource::new(config)?;
    orchestrator::scan::orchestrate_scan(&source, config).await
}

/// Run the scan pipeline against an arbitrary [`ListingSource`].
///
/// # Errors
///
/// Same as [`scan`], minus client construction.
pub async fn scan_with<S: ListingSource>(source: &S, config: &ScanConfig) -> Result<ScanReport> {
    config.validate()?;
    orchestrator::scan::orchestrate_scan(source, config).await
}

/// Score one text body against `skills` without fetching anything.
///
/// The text is normalized first, so raw comment HTML can be passed directly.
///
/// # Errors
///
/// Returns [`MatchError::Config`] if a skill phrase cannot be compiled.
pub fn score_text<S: AsRef<str>>(text: &str, skills: &[S]) -> Result<ScoreOutcome> {
    let scorer = Scorer::new(skills)?;
    Ok(scorer.score(&normalize::normalize_text(Some(text))))
}
