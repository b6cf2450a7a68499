//! Skill-based relevance scoring for listing text.
//!
//! Assigns an integer score based on:
//! - Skill phrases matched on word boundaries (+10 each, once per phrase)
//! - Senior-tier markers anywhere in the text (+5)
//! - Junior-tier markers anywhere in the text (-10)
//! - The word `remote` (+5, once)
//!
//! The total is clamped at zero. Scoring is pure: the same text always
//! produces the same score and the same matched-skill list.

use regex::Regex;

use crate::error::MatchError;

/// Points awarded per matched skill phrase.
pub const SKILL_POINTS: i64 = 10;
/// Bonus when any senior-tier marker is present.
pub const SENIOR_BONUS: i64 = 5;
/// Penalty when any junior-tier marker is present.
pub const JUNIOR_PENALTY: i64 = 10;
/// Bonus when the text mentions remote work.
pub const REMOTE_BONUS: i64 = 5;

/// Markers for roles at or above the target level.
pub const SENIOR_MARKERS: &[&str] = &["senior", "lead", "staff"];
/// Markers for roles below the target level.
pub const JUNIOR_MARKERS: &[&str] = &["junior", "intern", "entry"];

/// Score and matched skills for one text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    /// Clamped relevance score.
    pub score: u32,
    /// Matched skill phrases, in skill-set order, each at most once.
    pub matched_skills: Vec<String>,
}

/// Pre-compiled scorer for a fixed skill set.
///
/// Build once per scan with [`Scorer::new`]; every phrase pattern is compiled
/// up front so scoring a listing never touches the regex compiler.
#[derive(Debug, Clone)]
pub struct Scorer {
    skills: Vec<(String, Regex)>,
    remote: Regex,
}

impl Scorer {
    /// Compile word-boundary patterns for `skills`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Config`] if a pattern cannot be compiled.
    pub fn new<S: AsRef<str>>(skills: &[S]) -> Result<Self, MatchError> {
        let skills = skills
            .iter()
            .map(|skill| {
                let skill = skill.as_ref();
                word_pattern(skill).map(|re| (skill.to_owned(), re))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            skills,
            remote: word_pattern("remote")?,
        })
    }

    /// Number of skill phrases this scorer matches against.
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// Score a normalized text body.
    pub fn score(&self, text: &str) -> ScoreOutcome {
        let lower = text.to_lowercase();

        let matched_skills: Vec<String> = self
            .skills
            .iter()
            .filter(|(_, re)| re.is_match(&lower))
            .map(|(skill, _)| skill.clone())
            .collect();

        let mut score = matched_skills.len() as i64 * SKILL_POINTS;
        if SENIOR_MARKERS.iter().any(|m| lower.contains(m)) {
            score += SENIOR_BONUS;
        }
        if JUNIOR_MARKERS.iter().any(|m| lower.contains(m)) {
            score -= JUNIOR_PENALTY;
        }
        if self.remote.is_match(&lower) {
            score += REMOTE_BONUS;
        }

        ScoreOutcome {
            score: u32::try_from(score.max(0)).unwrap_or(u32::MAX),
            matched_skills,
        }
    }
}

/// Case-insensitive pattern matching `phrase` with a word boundary at each end.
fn word_pattern(phrase: &str) -> Result<Regex, MatchError> {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(&phrase.to_lowercase()));
    Regex::new(&pattern)
        .map_err(|e| MatchError::Config(format!("invalid skill phrase {phrase:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SKILLS;

    fn scorer() -> Scorer {
        Scorer::new(DEFAULT_SKILLS).expect("default skills compile")
    }

    #[test]
    fn no_skills_no_markers_scores_zero() {
        let outcome = scorer().score("We are looking for a barista to join our cafe in Lisbon.");
        assert_eq!(outcome.score, 0);
        assert!(outcome.matched_skills.is_empty());
    }

    #[test]
    fn two_skills_score_twenty_in_skill_order() {
        let outcome = scorer().score("Must know SQL and Python for this analytics role.");
        assert_eq!(outcome.score, 20);
        assert_eq!(outcome.matched_skills, ["python", "sql"]);
    }

    #[test]
    fn skill_counted_once_despite_repetition() {
        let outcome = scorer().score("python python python");
        assert_eq!(outcome.score, 10);
        assert_eq!(outcome.matched_skills, ["python"]);
    }

    #[test]
    fn substring_does_not_match() {
        // "gitlab" must not count as "git", "sqlite" not as "sql", "awesome" not as "aws".
        let outcome = scorer().score("gitlab sqlite awesome pythonic");
        assert!(outcome.matched_skills.is_empty());
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn multi_word_phrase_matches() {
        let outcome = scorer().score("Experience with Computer Vision and a REST API.");
        assert_eq!(outcome.matched_skills, ["computer vision", "rest api"]);
        assert_eq!(outcome.score, 20);
    }

    #[test]
    fn hyphenated_phrase_matches() {
        let outcome = scorer().score("scikit-learn pipelines");
        assert_eq!(outcome.matched_skills, ["scikit-learn"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let outcome = scorer().score("PYTHON, PyTorch and Kubernetes");
        assert_eq!(outcome.matched_skills, ["python", "pytorch", "kubernetes"]);
    }

    #[test]
    fn senior_marker_adds_five() {
        let outcome = scorer().score("Senior python developer");
        assert_eq!(outcome.score, 15);
    }

    #[test]
    fn senior_and_junior_both_apply() {
        // +10 python, +5 senior, -10 intern
        let outcome = scorer().score("Senior python mentor for our intern cohort");
        assert_eq!(outcome.score, 5);
    }

    #[test]
    fn junior_only_clamps_to_zero() {
        let outcome = scorer().score("Junior intern, entry level position");
        assert_eq!(outcome.score, 0);
        assert!(outcome.matched_skills.is_empty());
    }

    #[test]
    fn remote_bonus_applies_once() {
        let once = scorer().score("python remote");
        let many = scorer().score("python remote remote REMOTE remote-first");
        assert_eq!(once.score, 15);
        assert_eq!(many.score, 15);
    }

    #[test]
    fn remote_requires_whole_word() {
        let outcome = scorer().score("python remotely");
        assert_eq!(outcome.score, 10);
    }

    #[test]
    fn seniority_markers_match_as_substrings() {
        // "leadership" contains "lead"
        let outcome = scorer().score("python leadership");
        assert_eq!(outcome.score, 15);
    }

    #[test]
    fn scoring_is_deterministic() {
        let s = scorer();
        let text = "Staff ML engineer, remote, python, pytorch, docker";
        assert_eq!(s.score(text), s.score(text));
    }

    #[test]
    fn custom_skill_set_injected() {
        let s = Scorer::new(&["rust", "tokio"]).expect("compile");
        assert_eq!(s.skill_count(), 2);
        let outcome = s.score("Tokio and Rust wanted; python not needed");
        assert_eq!(outcome.matched_skills, ["rust", "tokio"]);
        assert_eq!(outcome.score, 20);
    }

    #[test]
    fn regex_metacharacters_are_escaped() {
        let s = Scorer::new(&["node.js"]).expect("compile");
        assert!(s.score("nodexjs").matched_skills.is_empty());
        assert_eq!(s.score("node.js backend").matched_skills, ["node.js"]);
    }

    #[test]
    fn default_skill_count() {
        assert_eq!(scorer().skill_count(), 24);
    }
}
