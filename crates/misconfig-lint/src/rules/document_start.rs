//! Explicit `---` before each document

use super::LintRule;
use crate::config::RuleToggle;
use crate::scanner::{Document, LineKind};
use crate::{Level, Problem};

pub struct DocumentStart {
    level: Level,
}

impl DocumentStart {
    pub fn new(config: &RuleToggle) -> Self {
        Self {
            level: config.level,
        }
    }
}

impl LintRule for DocumentStart {
    fn id(&self) -> &'static str {
        "document-start"
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();
        let mut expecting = true;

        for line in &doc.lines {
            match line.kind {
                LineKind::DocumentStart => expecting = false,
                LineKind::DocumentEnd => expecting = true,
                LineKind::Content | LineKind::Continuation | LineKind::BlockScalar
                    if expecting =>
                {
                    problems.push(Problem::new(
                        line.number,
                        1,
                        self.id(),
                        self.level,
                        "missing document start \"---\"",
                    ));
                    expecting = false;
                }
                _ => {}
            }
        }

        problems
    }
}
