//! Lint rules
//!
//! Every rule implements [`LintRule`] and reports problems for one concern.
//! Rules never fail: malformed input simply yields findings, or none, and
//! the parser that runs afterwards has the final word on syntax.

use crate::scanner::{Document, Line, LineKind};
use crate::Problem;

pub mod anchors;
pub mod colons;
pub mod commas;
pub mod comments;
pub mod document_start;
pub mod empty_lines;
pub mod flow_spacing;
pub mod hyphens;
pub mod indentation;
pub mod key_duplicates;
pub mod line_length;
pub mod new_lines;
pub mod trailing_spaces;
pub mod truthy;

pub use anchors::Anchors;
pub use colons::Colons;
pub use commas::Commas;
pub use comments::{Comments, CommentsIndentation};
pub use document_start::DocumentStart;
pub use empty_lines::EmptyLines;
pub use flow_spacing::FlowSpacing;
pub use hyphens::Hyphens;
pub use indentation::Indentation;
pub use key_duplicates::KeyDuplicates;
pub use line_length::LineLength;
pub use new_lines::{NewLineAtEndOfFile, NewLines};
pub use trailing_spaces::TrailingSpaces;
pub use truthy::Truthy;

/// Trait for all lint rules
pub trait LintRule: Send + Sync {
    /// Rule identifier, as used in profiles and findings
    fn id(&self) -> &'static str;

    /// Inspect the scanned document
    fn check(&self, doc: &Document) -> Vec<Problem>;
}

/// Lines whose masked code may carry indicators
pub(crate) fn code_lines(doc: &Document) -> impl Iterator<Item = &Line> {
    doc.lines.iter().filter(|line| {
        matches!(
            line.kind,
            LineKind::Content | LineKind::Continuation | LineKind::DocumentStart
        )
    })
}

/// Number of spaces directly before index `i`, and whether anything other
/// than indentation precedes them
pub(crate) fn spaces_before(code: &[char], i: usize) -> (usize, bool) {
    let mut j = i;
    while j > 0 && code[j - 1] == ' ' {
        j -= 1;
    }
    (i - j, j > 0)
}

/// Number of spaces directly after index `i`, and whether anything follows
/// them on the line
pub(crate) fn spaces_after(code: &[char], i: usize) -> (usize, bool) {
    let mut j = i + 1;
    while j < code.len() && code[j] == ' ' {
        j += 1;
    }
    (j - i - 1, j < code.len())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::LintRule;
    use crate::scanner::Document;

    /// Run a single rule and return `(line, column)` of each finding
    pub fn positions(rule: &dyn LintRule, text: &str) -> Vec<(usize, usize)> {
        rule.check(&Document::parse(text))
            .into_iter()
            .map(|p| (p.line, p.column))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_helpers() {
        let code: Vec<char> = "a:   b".chars().collect();
        assert_eq!(spaces_after(&code, 1), (3, true));
        assert_eq!(spaces_before(&code, 5), (3, true));

        let code: Vec<char> = "  ]".chars().collect();
        assert_eq!(spaces_before(&code, 2), (2, false));
    }
}
