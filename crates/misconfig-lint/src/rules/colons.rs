//! Spacing around mapping colons

use super::{code_lines, spaces_after, spaces_before, LintRule};
use crate::config::ColonsConfig;
use crate::scanner::{is_value_boundary, Document};
use crate::{Level, Problem};

const ID: &str = "colons";

pub struct Colons {
    level: Level,
    max_spaces_before: usize,
    max_spaces_after: usize,
}

impl Colons {
    pub fn new(config: &ColonsConfig) -> Self {
        Self {
            level: config.level,
            max_spaces_before: config.max_spaces_before,
            max_spaces_after: config.max_spaces_after,
        }
    }
}

impl LintRule for Colons {
    fn id(&self) -> &'static str {
        ID
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();

        for line in code_lines(doc) {
            let code = &line.code;
            for (i, c) in code.iter().enumerate() {
                if *c != ':' || !is_value_boundary(code.get(i + 1).copied()) {
                    continue;
                }

                let (before, has_content) = spaces_before(code, i);
                // `*alias :` needs the space to end the alias name.
                let alias_key = follows_alias(code, i - before);
                if has_content && before > self.max_spaces_before && !alias_key {
                    problems.push(Problem::new(
                        line.number,
                        i,
                        ID,
                        self.level,
                        "too many spaces before colon",
                    ));
                }

                let (after, has_value) = spaces_after(code, i);
                if has_value && after > self.max_spaces_after {
                    problems.push(Problem::new(
                        line.number,
                        i + self.max_spaces_after + 2,
                        ID,
                        self.level,
                        "too many spaces after colon",
                    ));
                }
            }
        }

        problems
    }
}

/// The word ending at `end` is an alias
fn follows_alias(code: &[char], end: usize) -> bool {
    let start = code[..end]
        .iter()
        .rposition(|c| c.is_whitespace())
        .map_or(0, |p| p + 1);
    code.get(start) == Some(&'*')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::positions;

    fn rule() -> Colons {
        Colons::new(&ColonsConfig::default())
    }

    #[test]
    fn test_well_spaced() {
        let text = "---\na: 1\nurl: http://host:80\nb:\n  - c: {d: 1}\ntime: 12:30\n";
        assert!(positions(&rule(), text).is_empty());
    }

    #[test]
    fn test_space_before_colon() {
        assert_eq!(positions(&rule(), "---\na : 1\n"), vec![(2, 2)]);
    }

    #[test]
    fn test_too_many_after_colon() {
        assert_eq!(positions(&rule(), "---\na:   1\n"), vec![(2, 4)]);
    }

    #[test]
    fn test_alias_key_may_have_space() {
        assert!(positions(&rule(), "---\nbase: &b x\n*b : 1\n").is_empty());
    }

    #[test]
    fn test_quoted_colon_ignored() {
        assert!(positions(&rule(), "---\na: \"x :   y\"\n").is_empty());
    }
}
