//! Optional TOML configuration for job-scanner.
//!
//! Every field is optional. Unset fields fall back to the stock values in
//! [`job_match::ScanConfig::default()`]; command-line flags override both.
//!
//! ```toml
//! keywords = ["rust engineer", "backend"]
//! skills = ["rust", "tokio", "postgresql"]
//! limit = 30
//! top = 5
//! timeout_seconds = 10
//! output_dir = "/home/alice/scans"
//! ```

use std::path::{Path, PathBuf};

use job_match::ScanConfig;
use serde::Deserialize;

use crate::error::{Result, ScannerError};

/// File-backed scanner settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Search keywords, queried in order.
    pub keywords: Option<Vec<String>>,
    /// Skill phrases to score against, in reporting order.
    pub skills: Option<Vec<String>>,
    /// Maximum hits per keyword.
    pub limit: Option<usize>,
    /// Number of results to report.
    pub top: Option<usize>,
    /// Per-request timeout in seconds.
    pub timeout_seconds: Option<u64>,
    /// Search endpoint override.
    pub endpoint: Option<String>,
    /// Directory for the per-day results file.
    pub output_dir: Option<PathBuf>,
}

impl ScannerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ScannerError::Config(format!("parse {}: {e}", path.display())))
    }

    /// Load configuration from `path` if it exists, otherwise return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        tracing::debug!(path = %path.display(), "loading config file");
        Self::from_file(path)
    }

    /// Overlay `overrides` on `self`; any field set in `overrides` wins.
    #[must_use]
    pub fn merged_with(self, overrides: Self) -> Self {
        Self {
            keywords: overrides.keywords.or(self.keywords),
            skills: overrides.skills.or(self.skills),
            limit: overrides.limit.or(self.limit),
            top: overrides.top.or(self.top),
            timeout_seconds: overrides.timeout_seconds.or(self.timeout_seconds),
            endpoint: overrides.endpoint.or(self.endpoint),
            output_dir: overrides.output_dir.or(self.output_dir),
        }
    }

    /// Build the matching-core configuration, filling gaps with stock values.
    ///
    /// The result is not validated; [`job_match::scan`] does that.
    #[must_use]
    pub fn to_scan_config(&self) -> ScanConfig {
        let defaults = ScanConfig::default();
        ScanConfig {
            keywords: self.keywords.clone().unwrap_or(defaults.keywords),
            skills: self.skills.clone().unwrap_or(defaults.skills),
            limit_per_keyword: self.limit.unwrap_or(defaults.limit_per_keyword),
            top_n: self.top.unwrap_or(defaults.top_n),
            timeout_seconds: self.timeout_seconds.unwrap_or(defaults.timeout_seconds),
            endpoint: self.endpoint.clone().unwrap_or(defaults.endpoint),
            ..defaults
        }
    }
}
