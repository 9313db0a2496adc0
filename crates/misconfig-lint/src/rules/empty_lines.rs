//! Runs of blank lines

use super::LintRule;
use crate::config::EmptyLinesConfig;
use crate::scanner::Document;
use crate::{Level, Problem};

const ID: &str = "empty-lines";

pub struct EmptyLines {
    level: Level,
    max: usize,
    max_start: usize,
    max_end: usize,
}

impl EmptyLines {
    pub fn new(config: &EmptyLinesConfig) -> Self {
        Self {
            level: config.level,
            max: config.max,
            max_start: config.max_start,
            max_end: config.max_end,
        }
    }

    fn limit(&self, at_start: bool, at_end: bool) -> usize {
        if at_end {
            self.max_end
        } else if at_start {
            self.max_start
        } else {
            self.max
        }
    }
}

impl LintRule for EmptyLines {
    fn id(&self) -> &'static str {
        ID
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();
        let mut run = 0usize;

        let mut flush = |run: usize, last_line: usize, at_end: bool| {
            if run == 0 {
                return;
            }
            let at_start = last_line == run;
            let limit = self.limit(at_start, at_end);
            if run > limit {
                problems.push(Problem::new(
                    last_line,
                    1,
                    ID,
                    self.level,
                    format!("too many blank lines ({} > {})", run, limit),
                ));
            }
        };

        for line in &doc.lines {
            if line.is_empty() {
                run += 1;
            } else {
                flush(run, line.number - 1, false);
                run = 0;
            }
        }
        flush(run, doc.lines.len(), true);

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::positions;

    fn rule() -> EmptyLines {
        EmptyLines::new(&EmptyLinesConfig::default())
    }

    #[test]
    fn test_two_blank_lines_allowed() {
        assert!(positions(&rule(), "---\na: 1\n\n\nb: 2\n").is_empty());
    }

    #[test]
    fn test_three_blank_lines_reported() {
        assert_eq!(positions(&rule(), "---\na: 1\n\n\n\nb: 2\n"), vec![(5, 1)]);
    }

    #[test]
    fn test_blank_lines_at_start_and_end() {
        assert_eq!(positions(&rule(), "\n---\na: 1\n"), vec![(1, 1)]);
        assert_eq!(positions(&rule(), "---\na: 1\n\n"), vec![(3, 1)]);
    }
}
