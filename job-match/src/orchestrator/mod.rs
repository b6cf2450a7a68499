//! Scan orchestrator: keyword fan-out, dedup, scoring, ranking.
//!
//! This module queries the listing source for every keyword, merges the
//! results in keyword order, drops duplicate identifiers and short bodies,
//! scores the rest against the skill set, and returns a sorted, truncated
//! result set.

pub mod aggregate;
pub mod dedup;
pub mod scan;
pub mod scoring;
