//! Duplicate-content detection over paragraph units.

use std::collections::HashSet;

use regex::Regex;

/// Minimum overlap between the halves' word sets for the back half to be
/// considered a restatement of the front half.
///
/// Deliberately loose: the trigger case is a generator emitting two
/// stylistically different renderings of identical substance, so heavy
/// rewording and reformatting must still count as "the same content".
/// Genuinely different back-half content that shares this much vocabulary
/// is an accepted false-positive risk. Any change here is a behavior change
/// that needs sign-off.
const OVERLAP_THRESHOLD: f64 = 0.75;

/// Documents with this many paragraph units or fewer skip detection.
const MIN_PARAGRAPHS: usize = 5;

/// Detects whether the back half of a document restates its front half.
///
/// Comparison is lexical only: paragraphs are stripped of markdown
/// formatting, lower-cased, and reduced to distinct-word sets (not
/// multisets). Holds only compiled regexes; safe to share across threads.
pub struct DuplicateDetector {
    heading_marks: Regex,
    bold_spans: Regex,
    italic_spans: Regex,
    rule_chars: Regex,
    whitespace_runs: Regex,
}

impl DuplicateDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self {
            heading_marks: Regex::new(r"#{1,6}\s+").unwrap(),
            bold_spans: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            italic_spans: Regex::new(r"\*(.+?)\*").unwrap(),
            rule_chars: Regex::new(r"[-:]+").unwrap(),
            whitespace_runs: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Collapse a duplicated back half.
    ///
    /// Splits the paragraphs at the midpoint index and compares the halves'
    /// normalized word sets. When the overlap ratio exceeds the threshold,
    /// only the front half survives, with its original formatting intact.
    /// Short documents and halves with no comparable words pass through
    /// unchanged.
    pub fn collapse<'a>(&self, mut paragraphs: Vec<&'a str>) -> Vec<&'a str> {
        if paragraphs.len() <= MIN_PARAGRAPHS {
            return paragraphs;
        }

        let midpoint = paragraphs.len() / 2;
        let front = self.normalize(&paragraphs[..midpoint]);
        let back = self.normalize(&paragraphs[midpoint..]);

        let front_words: HashSet<&str> = front.split_whitespace().collect();
        let back_words: HashSet<&str> = back.split_whitespace().collect();
        if front_words.is_empty() || back_words.is_empty() {
            return paragraphs;
        }

        let overlap = front_words.intersection(&back_words).count();
        let ratio = overlap as f64 / front_words.len() as f64;
        log::debug!(
            "duplicate check over {} paragraphs: overlap ratio {:.2}",
            paragraphs.len(),
            ratio
        );

        if ratio > OVERLAP_THRESHOLD {
            log::debug!(
                "back half restates front half, dropping {} paragraphs",
                paragraphs.len() - midpoint
            );
            paragraphs.truncate(midpoint);
        }
        paragraphs
    }

    fn normalize(&self, paragraphs: &[&str]) -> String {
        paragraphs
            .iter()
            .map(|p| self.strip_formatting(p))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Reduce a paragraph to comparable bare words: markdown heading
    /// markers, emphasis markers, table pipes, and dash/colon runs removed,
    /// whitespace collapsed, lower-cased.
    pub fn strip_formatting(&self, text: &str) -> String {
        let stripped = self.heading_marks.replace_all(text, "");
        let stripped = self.bold_spans.replace_all(&stripped, "$1");
        let stripped = self.italic_spans.replace_all(&stripped, "$1");
        let stripped = stripped.replace('|', "");
        let stripped = self.rule_chars.replace_all(&stripped, "");
        let stripped = self.whitespace_runs.replace_all(&stripped, " ");
        stripped.trim().to_lowercase()
    }
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new()
    }
}
