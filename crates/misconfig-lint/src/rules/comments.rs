//! Comment formatting and placement

use super::LintRule;
use crate::config::{CommentsConfig, RuleToggle};
use crate::scanner::{Document, LineKind};
use crate::{Level, Problem};

/// Space after `#` and distance from inline content
pub struct Comments {
    level: Level,
    require_starting_space: bool,
    ignore_shebangs: bool,
    min_spaces_from_content: usize,
}

impl Comments {
    pub fn new(config: &CommentsConfig) -> Self {
        Self {
            level: config.level,
            require_starting_space: config.require_starting_space,
            ignore_shebangs: config.ignore_shebangs,
            min_spaces_from_content: config.min_spaces_from_content,
        }
    }
}

impl LintRule for Comments {
    fn id(&self) -> &'static str {
        "comments"
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();

        for line in &doc.lines {
            let Some(hash) = line.comment else {
                continue;
            };
            let chars = line.chars();

            if line.has_code() {
                let gap = hash - line.code.len();
                if gap < self.min_spaces_from_content {
                    problems.push(Problem::new(
                        line.number,
                        hash + 1,
                        self.id(),
                        self.level,
                        format!(
                            "too few spaces before comment: expected {}",
                            self.min_spaces_from_content
                        ),
                    ));
                }
            }

            if !self.require_starting_space {
                continue;
            }
            let shebang = line.number == 1 && hash == 0 && chars.get(1) == Some(&'!');
            if self.ignore_shebangs && shebang {
                continue;
            }
            let mut text_start = hash + 1;
            while chars.get(text_start) == Some(&'#') {
                text_start += 1;
            }
            if text_start < chars.len() && chars[text_start] != ' ' {
                problems.push(Problem::new(
                    line.number,
                    text_start + 1,
                    self.id(),
                    self.level,
                    "missing starting space in comment",
                ));
            }
        }

        problems
    }
}

/// Full-line comments aligned with the surrounding content
pub struct CommentsIndentation {
    level: Level,
}

impl CommentsIndentation {
    pub fn new(config: &RuleToggle) -> Self {
        Self {
            level: config.level,
        }
    }
}

impl LintRule for CommentsIndentation {
    fn id(&self) -> &'static str {
        "comments-indentation"
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();

        for (idx, line) in doc.lines.iter().enumerate() {
            if line.kind != LineKind::Comment {
                continue;
            }
            let column = line.comment.unwrap_or(line.indent);

            let next_indent = doc.next_code_line(idx).map_or(0, |l| l.indent);
            let mut prev_indent = match doc.prev_code_line(idx) {
                Some(l) if l.kind != LineKind::DocumentStart => l.indent,
                _ => 0,
            };
            // Deeper content above only counts when the next line is not
            // nested even further.
            if prev_indent <= next_indent {
                prev_indent = next_indent;
            }
            // A comment block follows the comment right above it.
            if let Some(above) = idx.checked_sub(1).map(|i| &doc.lines[i]) {
                if above.kind == LineKind::Comment {
                    prev_indent = above.comment.unwrap_or(above.indent);
                }
            }

            if column != prev_indent && column != next_indent {
                problems.push(Problem::new(
                    line.number,
                    column + 1,
                    self.id(),
                    self.level,
                    "comment not indented like content",
                ));
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::positions;

    fn comments() -> Comments {
        Comments::new(&CommentsConfig::default())
    }

    fn indentation() -> CommentsIndentation {
        CommentsIndentation::new(&RuleToggle::warning())
    }

    #[test]
    fn test_well_formed_comments() {
        let text = "#!/usr/bin/env yaml\n---\n# title\n## section\na: 1  # inline\n#\n";
        assert!(positions(&comments(), text).is_empty());
    }

    #[test]
    fn test_missing_starting_space() {
        assert_eq!(positions(&comments(), "---\n#bad\na: 1  #bad\n"), vec![(2, 2), (3, 8)]);
    }

    #[test]
    fn test_too_close_to_content() {
        assert_eq!(positions(&comments(), "---\na: 1 # close\n"), vec![(2, 6)]);
    }

    #[test]
    fn test_comment_aligned_with_next_or_previous() {
        let text = "---\nobj:\n  # about a\n  a: 1\n  # trailing\nb: 2\n";
        assert!(positions(&indentation(), text).is_empty());
    }

    #[test]
    fn test_comment_misaligned() {
        let text = "---\nobj:\n    # off\n  a: 1\n";
        assert_eq!(positions(&indentation(), text), vec![(3, 5)]);
    }
}
