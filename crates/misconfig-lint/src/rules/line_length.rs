//! Maximum line length

use super::LintRule;
use crate::config::LineLengthConfig;
use crate::scanner::Document;
use crate::{Level, Problem};

const ID: &str = "line-length";

pub struct LineLength {
    level: Level,
    max: usize,
    allow_non_breakable_words: bool,
}

impl LineLength {
    pub fn new(config: &LineLengthConfig) -> Self {
        Self {
            level: config.level,
            max: config.max,
            allow_non_breakable_words: config.allow_non_breakable_words,
        }
    }
}

impl LintRule for LineLength {
    fn id(&self) -> &'static str {
        ID
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();

        for line in &doc.lines {
            let len = line.len();
            if len <= self.max {
                continue;
            }
            if self.allow_non_breakable_words && is_non_breakable(&line.chars()) {
                continue;
            }
            problems.push(Problem::new(
                line.number,
                self.max + 1,
                ID,
                self.level,
                format!("line too long ({} > {} characters)", len, self.max),
            ));
        }

        problems
    }
}

/// A single word (URL, hash, path) after the indentation and an optional
/// comment or sequence marker
fn is_non_breakable(chars: &[char]) -> bool {
    let mut start = chars.iter().take_while(|c| **c == ' ').count();
    if start == chars.len() {
        return false;
    }

    if chars[start] == '#' {
        while start < chars.len() && chars[start] == '#' {
            start += 1;
        }
        start += 1;
    } else if chars[start] == '-' {
        start += 2;
    }

    start >= chars.len() || !chars[start..].contains(&' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::positions;

    fn rule() -> LineLength {
        LineLength::new(&LineLengthConfig::default())
    }

    #[test]
    fn test_short_lines_pass() {
        assert!(positions(&rule(), "---\nkey: value\n").is_empty());
    }

    #[test]
    fn test_long_line_reported() {
        let text = format!("---\nkey: {}\n", "word ".repeat(20));
        assert_eq!(positions(&rule(), &text), vec![(2, 81)]);
    }

    #[test]
    fn test_non_breakable_word_allowed() {
        let url = format!("https://example.com/{}", "a".repeat(100));
        let text = format!("---\nlinks:\n  - {}\n  # {}\n", url, url);
        assert!(positions(&rule(), &text).is_empty());
    }

    #[test]
    fn test_non_breakable_disabled() {
        let config = LineLengthConfig {
            allow_non_breakable_words: false,
            ..Default::default()
        };
        let text = format!("{}\n", "a".repeat(90));
        let problems = LineLength::new(&config).check(&Document::parse(&text));
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].message, "line too long (90 > 80 characters)");
    }
}
