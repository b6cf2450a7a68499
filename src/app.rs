//! One scanner run: announce, scan, print, persist.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use job_match::{ScanConfig, ScanReport};

use crate::error::Result;
use crate::{report, store};

/// Everything a run needs, already resolved from file and flags.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Matching-core settings.
    pub scan: ScanConfig,
    /// Whether to write the results file.
    pub save: bool,
    /// Directory for the results file.
    pub output_dir: PathBuf,
    /// Calendar date naming the results file.
    pub date: NaiveDate,
}

/// What a run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: ScanReport,
    /// Path of the results file, if one was written.
    pub saved_to: Option<PathBuf>,
}

/// Run a scan, write the report to `out`, and save results when asked.
///
/// Per-keyword fetch failures never fail the run; they are logged and
/// noted in the output. An empty result set prints a single line and
/// writes no file.
///
/// # Errors
///
/// Returns an error for invalid settings, an unusable HTTP client, a
/// failed write to `out`, or a results file that cannot be written.
pub async fn run<W: Write>(options: &RunOptions, out: &mut W) -> Result<RunOutcome> {
    out.write_all(
        report::render_header(&options.scan.keywords, options.scan.skills.len()).as_bytes(),
    )?;
    out.flush()?;

    let report = job_match::scan(&options.scan).await?;
    tracing::debug!(ranked = report.listings.len(), save = options.save, "rendering report");

    out.write_all(report::render_results(&report.listings).as_bytes())?;
    out.write_all(report::render_failures(&report.failed_keywords).as_bytes())?;

    let saved_to = if options.save && !report.listings.is_empty() {
        let path = store::save_results(&options.output_dir, options.date, &report.listings)?;
        out.write_all(report::render_saved(&path).as_bytes())?;
        Some(path)
    } else {
        None
    };
    out.flush()?;

    Ok(RunOutcome { report, saved_to })
}
