//! Per-day JSON persistence of ranked results.
//!
//! One file per calendar day, `results-YYYY-MM-DD.json`, holding a pretty
//! printed JSON array of [`ScoredListing`]s. Re-running on the same day
//! overwrites that day's file.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use job_match::ScoredListing;

use crate::error::{Result, ScannerError};

/// File name for the results of `date`.
pub fn results_file_name(date: NaiveDate) -> String {
    format!("results-{}.json", date.format("%Y-%m-%d"))
}

/// Write `listings` to `dir/results-<date>.json`, creating `dir` if needed.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the listings cannot
/// be serialized, or the file cannot be written.
pub fn save_results(dir: &Path, date: NaiveDate, listings: &[ScoredListing]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(results_file_name(date));
    let json = serde_json::to_string_pretty(listings)
        .map_err(|e| ScannerError::Serialize(e.to_string()))?;
    std::fs::write(&path, json)?;
    tracing::info!(path = %path.display(), count = listings.len(), "results saved");
    Ok(path)
}
