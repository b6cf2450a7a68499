//! Scan configuration with the stock keyword and skill lists.
//!
//! [`ScanConfig`] is passed explicitly to the source, the scorer and the
//! aggregator, so alternate skill sets can be injected without touching
//! module-level state.

use url::Url;

use crate::error::MatchError;

/// Keywords queried when none are supplied.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "data scientist",
    "ML engineer",
    "AI engineer",
    "machine learning",
    "deep learning",
];

/// Skill phrases scored when none are supplied, in reporting order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "fastapi",
    "react",
    "typescript",
    "xgboost",
    "yolov8",
    "nlp",
    "computer vision",
    "aws",
    "docker",
    "postgresql",
    "redis",
    "claude",
    "langchain",
    "scikit-learn",
    "pytorch",
    "tensorflow",
    "kubernetes",
    "sql",
    "git",
    "rest api",
    "microservices",
    "llm",
    "openai",
];

/// Algolia-backed Hacker News search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

/// Base for the per-item discussion link; the identifier is appended as `id`.
pub const DEFAULT_ITEM_URL_BASE: &str = "https://news.ycombinator.com/item";

/// Configuration for one scan run.
///
/// Use [`Default::default()`] for the stock keyword and skill lists, or
/// construct with field overrides.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Search keywords, queried in order. Order decides which duplicate wins.
    pub keywords: Vec<String>,
    /// Skill phrases, matched case-insensitively on word boundaries.
    pub skills: Vec<String>,
    /// Maximum hits requested per keyword.
    pub limit_per_keyword: usize,
    /// Number of ranked listings kept after sorting.
    pub top_n: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Normalized bodies shorter than this many characters are ignored.
    pub min_text_chars: usize,
    /// Length of the snippet stored on each scored listing, in characters.
    pub snippet_chars: usize,
    /// Search endpoint queried for each keyword.
    pub endpoint: String,
    /// Base URL used to build each listing's reference link.
    pub item_url_base: String,
    /// Custom User-Agent string. If `None`, `job-match/<version>` is sent.
    pub user_agent: Option<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| (*k).to_owned()).collect(),
            skills: DEFAULT_SKILLS.iter().map(|s| (*s).to_owned()).collect(),
            limit_per_keyword: 50,
            top_n: 10,
            timeout_seconds: 15,
            min_text_chars: 50,
            snippet_chars: 300,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            item_url_base: DEFAULT_ITEM_URL_BASE.to_owned(),
            user_agent: None,
        }
    }
}

impl ScanConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `keywords` and `skills` must be non-empty and contain no blank entries
    /// - `limit_per_keyword`, `top_n` and `timeout_seconds` must be greater than 0
    /// - `endpoint` and `item_url_base` must parse as absolute URLs
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.keywords.is_empty() {
            return Err(MatchError::Config(
                "at least one keyword is required".into(),
            ));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(MatchError::Config("keywords must not be blank".into()));
        }
        if self.skills.is_empty() {
            return Err(MatchError::Config("at least one skill is required".into()));
        }
        if self.skills.iter().any(|s| s.trim().is_empty()) {
            return Err(MatchError::Config("skills must not be blank".into()));
        }
        if self.limit_per_keyword == 0 {
            return Err(MatchError::Config(
                "limit_per_keyword must be greater than 0".into(),
            ));
        }
        if self.top_n == 0 {
            return Err(MatchError::Config("top_n must be greater than 0".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(MatchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Url::parse(&self.endpoint)
            .map_err(|e| MatchError::Config(format!("invalid endpoint {}: {e}", self.endpoint)))?;
        Url::parse(&self.item_url_base).map_err(|e| {
            MatchError::Config(format!(
                "invalid item_url_base {}: {e}",
                self.item_url_base
            ))
        })?;
        Ok(())
    }
}
