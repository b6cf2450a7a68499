//! job-scanner: find Hacker News job listings that match a skill list.
//!
//! Ranking lives in the `job-match` crate. This crate adds the outer layer:
//!
//! - **Config**: optional TOML file merged with command-line flags
//! - **Report**: fixed-width terminal table of the top matches
//! - **Store**: one pretty-printed JSON results file per calendar day

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner_dirs;
pub mod store;

pub use app::{RunOptions, RunOutcome, run};
pub use config::ScannerConfig;
pub use error::{Result, ScannerError};
