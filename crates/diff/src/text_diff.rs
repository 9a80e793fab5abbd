use std::time::Duration;

use similar::{Algorithm, TextDiff as SimilarTextDiff};

use crate::parser::parse_unified;
use crate::row::ParsedDiff;

/// Wrapper around text diff operations
pub struct TextDiff;

impl TextDiff {
    /// Generate a unified diff string (like git diff) with `a`/`b` headers
    pub fn unified_diff(old_text: &str, new_text: &str, context_lines: usize) -> String {
        Self::unified_diff_with_header(old_text, new_text, "a", "b", context_lines)
    }

    /// Generate a unified diff string with the given file names in the
    /// `---`/`+++` header lines. Identical texts produce an empty string.
    pub fn unified_diff_with_header(
        old_text: &str,
        new_text: &str,
        old_name: &str,
        new_name: &str,
        context_lines: usize,
    ) -> String {
        let diff = SimilarTextDiff::configure()
            .algorithm(Algorithm::Myers)
            .timeout(Duration::from_secs(5))
            .diff_lines(old_text, new_text);

        diff.unified_diff()
            .context_radius(context_lines)
            .missing_newline_hint(true)
            .header(old_name, new_name)
            .to_string()
    }

    /// Diff two texts and parse the result into side-by-side rows
    pub fn parse(old_text: &str, new_text: &str, context_lines: usize) -> ParsedDiff {
        parse_unified(&Self::unified_diff(old_text, new_text, context_lines))
    }
}
