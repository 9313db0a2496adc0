//! Spaces inside flow mappings (`braces`) and flow sequences (`brackets`)

use super::{code_lines, spaces_after, spaces_before, LintRule};
use crate::config::SpacingInsideConfig;
use crate::scanner::Document;
use crate::{Level, Problem};

pub struct FlowSpacing {
    id: &'static str,
    open: char,
    close: char,
    level: Level,
    max_spaces_inside: usize,
    max_spaces_inside_empty: usize,
}

impl FlowSpacing {
    /// Rule for `{ }`
    pub fn braces(config: &SpacingInsideConfig) -> Self {
        Self::new("braces", '{', '}', config)
    }

    /// Rule for `[ ]`
    pub fn brackets(config: &SpacingInsideConfig) -> Self {
        Self::new("brackets", '[', ']', config)
    }

    fn new(id: &'static str, open: char, close: char, config: &SpacingInsideConfig) -> Self {
        Self {
            id,
            open,
            close,
            level: config.level,
            max_spaces_inside: config.max_spaces_inside,
            max_spaces_inside_empty: config.max_spaces_inside_empty,
        }
    }

    fn problem(&self, line: usize, column: usize, empty: bool) -> Problem {
        let message = if empty {
            format!("too many spaces inside empty {}", self.id)
        } else {
            format!("too many spaces inside {}", self.id)
        };
        Problem::new(line, column, self.id, self.level, message)
    }
}

impl LintRule for FlowSpacing {
    fn id(&self) -> &'static str {
        self.id
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();

        for line in code_lines(doc) {
            let code = &line.code;
            for (i, c) in code.iter().enumerate() {
                if *c == self.open {
                    let (after, has_next) = spaces_after(code, i);
                    if !has_next {
                        continue;
                    }
                    let empty = code[i + after + 1] == self.close;
                    let max = if empty {
                        self.max_spaces_inside_empty
                    } else {
                        self.max_spaces_inside
                    };
                    if after > max {
                        problems.push(self.problem(line.number, i + max + 2, empty));
                    }
                } else if *c == self.close {
                    let (before, has_content) = spaces_before(code, i);
                    if !has_content || before == 0 || code[i - before - 1] == self.open {
                        continue;
                    }
                    if before > self.max_spaces_inside {
                        problems.push(self.problem(line.number, i, false));
                    }
                }
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::positions;

    #[test]
    fn test_braces() {
        let rule = FlowSpacing::braces(&SpacingInsideConfig::default());
        assert!(positions(&rule, "---\na: {b: 1}\nc: {}\nd: {\n  e: 1\n}\n").is_empty());
        assert_eq!(positions(&rule, "---\na: { b: 1 }\n"), vec![(2, 5), (2, 10)]);
        assert_eq!(positions(&rule, "---\na: { }\n"), vec![(2, 5)]);
    }

    #[test]
    fn test_brackets() {
        let rule = FlowSpacing::brackets(&SpacingInsideConfig::default());
        assert!(positions(&rule, "---\na: [1, 2]\nb: []\n").is_empty());
        assert_eq!(positions(&rule, "---\na: [ 1, 2]\n"), vec![(2, 5)]);
        assert!(positions(&rule, "---\nkey: \"[ not flow ]\"\n").is_empty());
    }
}
