//! Line terminators

use super::LintRule;
use crate::config::RuleToggle;
use crate::scanner::Document;
use crate::{Level, Problem};

/// Unix line endings only
pub struct NewLines {
    level: Level,
}

impl NewLines {
    pub fn new(config: &RuleToggle) -> Self {
        Self {
            level: config.level,
        }
    }
}

impl LintRule for NewLines {
    fn id(&self) -> &'static str {
        "new-lines"
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        // One finding is enough: a file converted to CRLF has it everywhere.
        doc.lines
            .iter()
            .find(|line| line.crlf)
            .map(|line| {
                Problem::new(
                    line.number,
                    line.len() + 1,
                    self.id(),
                    self.level,
                    "wrong new line character: expected \\n",
                )
            })
            .into_iter()
            .collect()
    }
}

/// Final newline required
pub struct NewLineAtEndOfFile {
    level: Level,
}

impl NewLineAtEndOfFile {
    pub fn new(config: &RuleToggle) -> Self {
        Self {
            level: config.level,
        }
    }
}

impl LintRule for NewLineAtEndOfFile {
    fn id(&self) -> &'static str {
        "new-line-at-end-of-file"
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        if doc.ends_with_newline {
            return Vec::new();
        }
        doc.lines
            .last()
            .map(|line| {
                Problem::new(
                    line.number,
                    line.len() + 1,
                    self.id(),
                    self.level,
                    "no new line character at the end of file",
                )
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::positions;

    #[test]
    fn test_crlf_reported_once() {
        let rule = NewLines::new(&RuleToggle::error());
        assert!(positions(&rule, "---\na: 1\n").is_empty());
        assert_eq!(positions(&rule, "---\r\na: 1\r\n"), vec![(1, 4)]);
    }

    #[test]
    fn test_missing_final_newline() {
        let rule = NewLineAtEndOfFile::new(&RuleToggle::error());
        assert!(positions(&rule, "---\na: 1\n").is_empty());
        assert!(positions(&rule, "").is_empty());
        assert_eq!(positions(&rule, "---\na: 1"), vec![(2, 5)]);
    }
}
