//! Hacker News comment search via the public Algolia API.
//!
//! Queries `GET {endpoint}?query=..&tags=comment&hitsPerPage=..` and decodes
//! the `hits` array. Hits without a usable `objectID` are skipped one by one
//! so a single bad record cannot sink the whole keyword.

use serde::Deserialize;

use crate::config::ScanConfig;
use crate::error::MatchError;
use crate::http;
use crate::source::ListingSource;
use crate::types::RawListing;

/// Algolia-backed Hacker News comment source.
pub struct HackerNewsSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HackerNewsSource {
    /// Create a source using the endpoint, timeout and User-Agent from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: &ScanConfig) -> Result<Self, MatchError> {
        Ok(Self {
            client: http::build_client(config)?,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl ListingSource for HackerNewsSource {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<RawListing>, MatchError> {
        tracing::debug!(query, limit, "Hacker News search");

        let hits_per_page = limit.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("query", query),
                ("tags", "comment"),
                ("hitsPerPage", hits_per_page.as_str()),
            ])
            .send()
            .await
            .map_err(|e| MatchError::Http(format!("Hacker News request failed: {e}")))?
            .error_for_status()
            .map_err(|e| MatchError::Http(format!("Hacker News HTTP error: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| MatchError::Http(format!("Hacker News response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "Hacker News response received");

        let mut listings = parse_search_response(&body)?;
        listings.truncate(limit);
        Ok(listings)
    }

    fn name(&self) -> &'static str {
        "HackerNews"
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct AlgoliaHit {
    #[serde(rename = "objectID")]
    object_id: Option<String>,
    comment_text: Option<String>,
    story_text: Option<String>,
    author: Option<String>,
    created_at: Option<String>,
}

impl AlgoliaHit {
    fn into_listing(self) -> Option<RawListing> {
        let id = self.object_id.filter(|id| !id.trim().is_empty())?;
        let body = self
            .comment_text
            .filter(|text| !text.is_empty())
            .or(self.story_text)
            .unwrap_or_default();
        Some(RawListing {
            id,
            body,
            author: self.author.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_default(),
        })
    }
}

/// Decode an Algolia search response body into raw listings.
///
/// Extracted as a separate function for testability with fixture payloads.
/// A missing `hits` key yields an empty list. Hits that are not objects, carry
/// mistyped fields, or lack an `objectID` are skipped with a warning.
///
/// # Errors
///
/// Returns [`MatchError::Parse`] if the body is not a JSON object.
pub(crate) fn parse_search_response(body: &str) -> Result<Vec<RawListing>, MatchError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| MatchError::Parse(format!("invalid search response: {e}")))?;

    let mut listings = Vec::with_capacity(response.hits.len());
    for (position, hit) in response.hits.into_iter().enumerate() {
        let decoded = match serde_json::from_value::<AlgoliaHit>(hit) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::warn!(position, error = %e, "skipping malformed hit");
                continue;
            }
        };
        match decoded.into_listing() {
            Some(listing) => listings.push(listing),
            None => tracing::warn!(position, "skipping hit without objectID"),
        }
    }

    tracing::debug!(count = listings.len(), "Hacker News hits parsed");
    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_HN_JSON: &str = include_str!("../../test-data/hn_search.json");

    #[test]
    fn fixture_skips_hit_without_object_id() {
        let listings = parse_search_response(FIXTURE_HN_JSON).expect("fixture should parse");
        assert_eq!(listings.len(), 3);
        let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["38842977", "38843120", "38843555"]);
    }

    #[test]
    fn fixture_preserves_metadata() {
        let listings = parse_search_response(FIXTURE_HN_JSON).expect("fixture should parse");
        assert_eq!(listings[0].author, "acme_hiring");
        assert_eq!(listings[0].created_at, "2024-01-02T16:04:11.000Z");
        assert!(listings[0].body.contains("PyTorch"));
    }

    #[test]
    fn story_text_used_when_comment_text_null() {
        let listings = parse_search_response(FIXTURE_HN_JSON).expect("fixture should parse");
        assert!(listings[1].body.starts_with("DataCo | Data Scientist"));
    }

    #[test]
    fn story_text_used_when_comment_text_empty() {
        let body = r#"{"hits":[{"objectID":"1","comment_text":"","story_text":"story body"}]}"#;
        let listings = parse_search_response(body).expect("should parse");
        assert_eq!(listings[0].body, "story body");
    }

    #[test]
    fn missing_text_fields_yield_empty_body() {
        let body = r#"{"hits":[{"objectID":"1"}]}"#;
        let listings = parse_search_response(body).expect("should parse");
        assert_eq!(listings.len(), 1);
        assert!(listings[0].body.is_empty());
        assert!(listings[0].author.is_empty());
        assert!(listings[0].created_at.is_empty());
    }

    #[test]
    fn missing_hits_key_is_empty() {
        let listings = parse_search_response(r#"{"nbHits":0}"#).expect("should parse");
        assert!(listings.is_empty());
    }

    #[test]
    fn mistyped_hit_is_skipped() {
        let body = concat!(
            r#"{"hits":[{"objectID":7,"comment_text":"numeric id"},"#,
            r#""not an object",{"objectID":"2"}]}"#
        );
        let listings = parse_search_response(body).expect("should parse");
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "2");
    }

    #[test]
    fn blank_object_id_is_skipped() {
        let body = r#"{"hits":[{"objectID":"  ","comment_text":"blank id"}]}"#;
        let listings = parse_search_response(body).expect("should parse");
        assert!(listings.is_empty());
    }

    #[test]
    fn non_json_body_is_parse_error() {
        let err = parse_search_response("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, MatchError::Parse(_)));
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HackerNewsSource>();
    }

    #[tokio::test]
    #[ignore] // Live test, run with `cargo test -- --ignored`
    async fn live_hacker_news_search() {
        let config = ScanConfig::default();
        let source = HackerNewsSource::new(&config).expect("client");
        let listings = source.fetch("machine learning", 5).await;
        let listings = listings.expect("live search should work");
        assert!(listings.len() <= 5);
        for l in &listings {
            assert!(!l.id.is_empty());
        }
    }
}
