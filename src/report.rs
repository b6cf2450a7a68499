//! Plain-text rendering of scan results for the terminal.
//!
//! Everything here returns `String`s so the exact layout can be asserted in
//! tests; the caller decides where to write them.

use std::fmt::Write as _;
use std::path::Path;

use job_match::ScoredListing;
use job_match::normalize::truncate_chars;

/// Matched skills listed before collapsing the rest into `+N more`.
const MAX_LISTED_SKILLS: usize = 5;
/// Snippet characters shown under each row.
const SNIPPET_PREVIEW_CHARS: usize = 120;
/// Width of the rule under the column header.
const RULE_WIDTH: usize = 90;

/// Message printed when nothing survived filtering.
pub const NO_MATCHES: &str = "No matches found. Try different keywords or check your connection.";

/// Lines announcing what is about to be scanned, followed by a blank line.
pub fn render_header(keywords: &[String], skill_count: usize) -> String {
    format!(
        "Scanning HN for: {}\nScoring against {skill_count} skills...\n\n",
        keywords.join(", ")
    )
}

/// The ranked results table, or [`NO_MATCHES`] when `listings` is empty.
pub fn render_results(listings: &[ScoredListing]) -> String {
    if listings.is_empty() {
        return format!("{NO_MATCHES}\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "Top {} matches:\n", listings.len());
    let _ = writeln!(out, "{:<4} {:<8} {:<40} URL", "#", "Score", "Skills Matched");
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    for (rank, listing) in listings.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<8} {:<40} {}",
            rank + 1,
            listing.score,
            skills_column(&listing.matched_skills),
            listing.url
        );
        let _ = writeln!(
            out,
            "     {}...",
            truncate_chars(&listing.snippet, SNIPPET_PREVIEW_CHARS)
        );
        out.push('\n');
    }
    out
}

/// Up to five skills joined by `, `, plus ` +N more` for the remainder.
pub fn skills_column(skills: &[String]) -> String {
    let mut column = skills
        .iter()
        .take(MAX_LISTED_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if skills.len() > MAX_LISTED_SKILLS {
        let _ = write!(column, " +{} more", skills.len() - MAX_LISTED_SKILLS);
    }
    column
}

/// Confirmation line after the results file is written.
pub fn render_saved(path: &Path) -> String {
    format!("Saved to {}\n", path.display())
}

/// One-line note naming keywords whose fetch failed; empty when none did.
pub fn render_failures(failed_keywords: &[String]) -> String {
    if failed_keywords.is_empty() {
        return String::new();
    }
    format!(
        "Note: {} keyword(s) could not be fetched: {}\n",
        failed_keywords.len(),
        failed_keywords.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, score: u32, skills: &[&str], snippet: &str) -> ScoredListing {
        ScoredListing {
            id: id.into(),
            score,
            matched_skills: skills.iter().map(|s| (*s).to_owned()).collect(),
            snippet: snippet.into(),
            url: format!("https://news.ycombinator.com/item?id={id}"),
            author: String::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn header_lists_keywords_and_skill_count() {
        let header = render_header(&["data scientist".into(), "ML engineer".into()], 24);
        assert_eq!(
            header,
            "Scanning HN for: data scientist, ML engineer\nScoring against 24 skills...\n\n"
        );
    }

    #[test]
    fn empty_results_render_single_line() {
        assert_eq!(render_results(&[]), format!("{NO_MATCHES}\n"));
    }

    #[test]
    fn table_layout_matches_columns() {
        let rendered = render_results(&[listing("1", 35, &["python", "sql"], "Hiring now")]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Top 1 matches:");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("#    Score    Skills Matched "));
        assert!(lines[2].ends_with(" URL"));
        assert_eq!(lines[2].len(), 4 + 1 + 8 + 1 + 40 + 1 + 3);
        assert_eq!(lines[3], "-".repeat(90));
        assert_eq!(
            lines[4],
            format!(
                "1    35       {:<40} https://news.ycombinator.com/item?id=1",
                "python, sql"
            )
        );
        assert_eq!(lines[5], "     Hiring now...");
        assert_eq!(lines[6], "");
    }

    #[test]
    fn ranks_are_one_based_and_ordered() {
        let rendered = render_results(&[
            listing("a", 40, &["python"], "first"),
            listing("b", 30, &["sql"], "second"),
        ]);
        assert!(rendered.contains("\n1    40 "));
        assert!(rendered.contains("\n2    30 "));
    }

    #[test]
    fn snippet_preview_truncated_to_120_chars() {
        let snippet = "x".repeat(300);
        let rendered = render_results(&[listing("1", 10, &["python"], &snippet)]);
        let preview = rendered
            .lines()
            .find(|l| l.starts_with("     x"))
            .expect("snippet line");
        assert_eq!(preview, format!("     {}...", "x".repeat(120)));
    }

    #[test]
    fn skills_column_up_to_five() {
        let skills: Vec<String> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        assert_eq!(skills_column(&skills), "a, b, c, d, e");
    }

    #[test]
    fn skills_column_overflow_count() {
        let skills: Vec<String> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        assert_eq!(skills_column(&skills), "a, b, c, d, e +2 more");
    }

    #[test]
    fn skills_column_empty() {
        assert_eq!(skills_column(&[]), "");
    }

    #[test]
    fn saved_line_names_path() {
        let line = render_saved(Path::new("/tmp/results-2024-01-02.json"));
        assert_eq!(line, "Saved to /tmp/results-2024-01-02.json\n");
    }

    #[test]
    fn failures_note_empty_without_failures() {
        assert!(render_failures(&[]).is_empty());
    }

    #[test]
    fn failures_note_lists_keywords() {
        let note = render_failures(&["ml".into(), "ai".into()]);
        assert_eq!(note, "Note: 2 keyword(s) could not be fetched: ml, ai\n");
    }
}
