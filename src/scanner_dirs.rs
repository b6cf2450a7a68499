//! Centralized filesystem paths for job-scanner.
//!
//! Uses the [`dirs`] crate for platform-appropriate directory resolution.
//!
//! # Directory Layout
//!
//! | Purpose | Default |
//! |---------|---------|
//! | Results | `~/.job-scanner/` |
//! | Config | `dirs::config_dir()/job-scanner/config.toml` |
//!
//! # Environment Overrides
//!
//! - `JOB_SCANNER_DIR` overrides [`results_dir`]
//! - `JOB_SCANNER_CONFIG` overrides [`config_file`]

use std::ffi::OsString;
use std::path::PathBuf;

/// Directory holding the per-day results files.
///
/// Resolves to `~/.job-scanner/` by default. Override with the
/// `JOB_SCANNER_DIR` environment variable.
#[must_use]
pub fn results_dir() -> PathBuf {
    resolve_results_dir(std::env::var_os("JOB_SCANNER_DIR"), dirs::home_dir())
}

/// Default configuration file path.
///
/// Resolves to `dirs::config_dir()/job-scanner/config.toml` by default.
/// Override with the `JOB_SCANNER_CONFIG` environment variable.
#[must_use]
pub fn config_file() -> PathBuf {
    if let Some(path) = std::env::var_os("JOB_SCANNER_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .map(|d| d.join("job-scanner"))
        .unwrap_or_else(|| PathBuf::from("/tmp/job-scanner-config"))
        .join("config.toml")
}

fn resolve_results_dir(override_dir: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    home.map(|h| h.join(".job-scanner"))
        .unwrap_or_else(|| PathBuf::from("/tmp/job-scanner"))
}
