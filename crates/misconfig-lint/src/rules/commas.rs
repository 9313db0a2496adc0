//! Spacing around commas in flow collections

use super::{code_lines, spaces_after, spaces_before, LintRule};
use crate::config::CommasConfig;
use crate::scanner::Document;
use crate::{Level, Problem};

const ID: &str = "commas";

pub struct Commas {
    level: Level,
    max_spaces_before: usize,
    min_spaces_after: usize,
    max_spaces_after: usize,
}

impl Commas {
    pub fn new(config: &CommasConfig) -> Self {
        Self {
            level: config.level,
            max_spaces_before: config.max_spaces_before,
            min_spaces_after: config.min_spaces_after,
            max_spaces_after: config.max_spaces_after,
        }
    }
}

impl LintRule for Commas {
    fn id(&self) -> &'static str {
        ID
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();

        // The scanner masks commas outside flow collections.
        for line in code_lines(doc) {
            let code = &line.code;
            for (i, c) in code.iter().enumerate() {
                if *c != ',' {
                    continue;
                }

                let (before, has_content) = spaces_before(code, i);
                if has_content && before > self.max_spaces_before {
                    problems.push(Problem::new(
                        line.number,
                        i,
                        ID,
                        self.level,
                        "too many spaces before comma",
                    ));
                }

                let (after, has_value) = spaces_after(code, i);
                if !has_value {
                    continue;
                }
                if after > self.max_spaces_after {
                    problems.push(Problem::new(
                        line.number,
                        i + self.max_spaces_after + 2,
                        ID,
                        self.level,
                        "too many spaces after comma",
                    ));
                } else if after < self.min_spaces_after {
                    problems.push(Problem::new(
                        line.number,
                        i + 2,
                        ID,
                        self.level,
                        "too few spaces after comma",
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

    fn rule() -> Commas {
        Commas::new(&CommasConfig::default())
    }

    #[test]
    fn test_well_spaced() {
        let text = "---\nlist: [1, 2, 3]\nplain: a,b\nmulti: [\n  1,\n  2\n]\n";
        assert!(positions(&rule(), text).is_empty());
    }

    #[test]
    fn test_spacing_problems() {
        assert_eq!(positions(&rule(), "---\na: [1 , 2]\n"), vec![(2, 6)]);
        assert_eq!(positions(&rule(), "---\na: [1,2]\n"), vec![(2, 7)]);
        assert_eq!(positions(&rule(), "---\na: [1,   2]\n"), vec![(2, 8)]);
    }
}
