//! Trailing whitespace

use super::LintRule;
use crate::config::RuleToggle;
use crate::scanner::Document;
use crate::{Level, Problem};

const ID: &str = "trailing-spaces";

pub struct TrailingSpaces {
    level: Level,
}

impl TrailingSpaces {
    pub fn new(config: &RuleToggle) -> Self {
        Self {
            level: config.level,
        }
    }
}

impl LintRule for TrailingSpaces {
    fn id(&self) -> &'static str {
        ID
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        doc.lines
            .iter()
            .filter_map(|line| {
                let chars = line.chars();
                let content = chars.len()
                    - chars.iter().rev().take_while(|c| c.is_whitespace()).count();
                (content < chars.len()).then(|| {
                    Problem::new(line.number, content + 1, ID, self.level, "trailing spaces")
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::positions;

    #[test]
    fn test_trailing_spaces() {
        let rule = TrailingSpaces::new(&RuleToggle::error());
        assert!(positions(&rule, "---\na: 1\n").is_empty());
        assert_eq!(positions(&rule, "---\na: 1  \nb: 2\t\n   \n"), vec![(2, 5), (3, 5), (4, 1)]);
    }

    #[test]
    fn test_crlf_is_not_trailing_space() {
        let rule = TrailingSpaces::new(&RuleToggle::error());
        assert!(positions(&rule, "---\r\na: 1\r\n").is_empty());
    }
}
