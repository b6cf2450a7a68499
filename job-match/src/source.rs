//! Trait definition for pluggable listing sources.
//!
//! The scan pipeline only ever talks to a [`ListingSource`]; the Hacker News
//! Algolia API is the production implementation, and tests substitute canned
//! sources.

use crate::error::MatchError;
use crate::types::RawListing;

/// A remote source of candidate listings.
///
/// Implementors handle their own:
///
/// - URL construction with query encoding
/// - HTTP request and status handling
/// - Payload decoding into [`RawListing`] values, skipping malformed records
///
/// All implementations must be `Send + Sync` so keyword queries can run
/// concurrently.
pub trait ListingSource: Send + Sync {
    /// Fetch up to `limit` listings matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if the request fails, the source answers with a
    /// non-success status, or the payload cannot be decoded as a whole.
    fn fetch(
        &self,
        query: &str,
        limit: usize,
    ) -> impl std::future::Future<Output = Result<Vec<RawListing>, MatchError>> + Send;

    /// Human-readable source name, used in log fields.
    fn name(&self) -> &'static str;
}
