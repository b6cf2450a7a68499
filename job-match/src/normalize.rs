//! Plain-text normalization for comment bodies.
//!
//! Comment bodies arrive as HTML fragments (`<p>`, `<a>`, `<i>`, escaped
//! entities). Scoring, length filtering and snippets all operate on the
//! normalized form produced here.

use scraper::Html;

/// Strip markup from `raw`, collapse whitespace runs to single spaces and trim.
///
/// Every tag boundary acts as a word separator, so `a<p>b` becomes `a b`.
/// Character references such as `&#x27;` and `&amp;` are decoded. Absent or
/// empty input yields an empty string.
pub fn normalize_text(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return String::new();
    };

    let fragment = Html::parse_fragment(raw);
    let joined = fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");

    collapse_whitespace(&joined)
}

/// Collapse every whitespace run to one space and trim both ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Return at most the first `max_chars` characters of `text`.
///
/// Counts `char`s, not bytes, so multi-byte text is never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
