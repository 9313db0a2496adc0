//! Spacing after block sequence hyphens

use super::{spaces_after, LintRule};
use crate::config::HyphensConfig;
use crate::scanner::Document;
use crate::{Level, Problem};

pub struct Hyphens {
    level: Level,
    max_spaces_after: usize,
}

impl Hyphens {
    pub fn new(config: &HyphensConfig) -> Self {
        Self {
            level: config.level,
            max_spaces_after: config.max_spaces_after,
        }
    }
}

impl LintRule for Hyphens {
    fn id(&self) -> &'static str {
        "hyphens"
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();

        for line in doc.lines.iter().filter(|l| l.is_structural()) {
            for col in line.hyphens() {
                let (after, has_value) = spaces_after(&line.code, col);
                if has_value && after > self.max_spaces_after {
                    problems.push(Problem::new(
                        line.number,
                        col + self.max_spaces_after + 2,
                        self.id(),
                        self.level,
                        "too many spaces after hyphen",
                    ));
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

    fn rule() -> Hyphens {
        Hyphens::new(&HyphensConfig::default())
    }

    #[test]
    fn test_single_space() {
        assert!(positions(&rule(), "---\n- a\n- - b\n-\n  c: 1\nd: -1\n").is_empty());
    }

    #[test]
    fn test_extra_spaces() {
        assert_eq!(positions(&rule(), "---\n-   a\n"), vec![(2, 3)]);
        assert_eq!(positions(&rule(), "---\n- -  b\n"), vec![(2, 5)]);
    }
}
