//! Command-line surface.
//!
//! Flags are folded into a [`ScannerConfig`] patch and laid over the config
//! file, so a flag always wins over the file and the file over stock values.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser};

use crate::app::RunOptions;
use crate::config::ScannerConfig;
use crate::error::Result;
use crate::scanner_dirs;

/// Scan Hacker News comments for job listings that match your skills.
#[derive(Debug, Parser)]
#[command(name = "job-scanner", version, about)]
pub struct Cli {
    /// Search keywords, one query each.
    #[arg(long, num_args = 1.., value_name = "KEYWORD")]
    pub keywords: Option<Vec<String>>,

    /// Maximum hits fetched per keyword.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Number of top matches to show.
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Do not write the results file.
    #[arg(long)]
    pub no_save: bool,

    /// Path to TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for the results file.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default `EnvFilter` directive for the chosen verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "job_scanner=info,job_match=info",
            1 => "job_scanner=debug,job_match=debug",
            _ => "job_scanner=trace,job_match=trace",
        }
    }

    /// Settings given on the command line, everything else unset.
    pub fn overrides(&self) -> ScannerConfig {
        ScannerConfig {
            keywords: self.keywords.clone(),
            limit: self.limit,
            top: self.top,
            output_dir: self.output_dir.clone(),
            ..ScannerConfig::default()
        }
    }

    /// Read the config file.
    ///
    /// An explicit `--config` must exist; the default location is read only
    /// when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_config(&self) -> Result<ScannerConfig> {
        match &self.config {
            Some(path) => ScannerConfig::from_file(path),
            None => ScannerConfig::load_optional(&scanner_dirs::config_file()),
        }
    }

    /// Resolve file and flag settings into the options for one run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable or the merged
    /// settings are invalid.
    pub fn into_run_options(self, date: NaiveDate) -> Result<RunOptions> {
        let file = self.load_config()?;
        resolve_options(file, &self, date)
    }
}

/// Merge `file` with the flags in `cli` and validate the outcome.
fn resolve_options(file: ScannerConfig, cli: &Cli, date: NaiveDate) -> Result<RunOptions> {
    let merged = file.merged_with(cli.overrides());
    let scan = merged.to_scan_config();
    scan.validate()?;
    let output_dir = merged.output_dir.unwrap_or_else(scanner_dirs::results_dir);
    Ok(RunOptions {
        scan,
        save: !cli.no_save,
        output_dir,
        date,
    })
}
