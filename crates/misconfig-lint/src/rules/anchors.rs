//! Aliases must refer to declared anchors

use std::collections::HashSet;

use super::{code_lines, LintRule};
use crate::config::RuleToggle;
use crate::scanner::{starts_node, Document, LineKind};
use crate::{Level, Problem};

pub struct Anchors {
    level: Level,
}

impl Anchors {
    pub fn new(config: &RuleToggle) -> Self {
        Self {
            level: config.level,
        }
    }
}

impl LintRule for Anchors {
    fn id(&self) -> &'static str {
        "anchors"
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();
        let mut declared: HashSet<String> = HashSet::new();

        for line in code_lines(doc) {
            if line.kind == LineKind::DocumentStart {
                declared.clear();
            }

            let code = &line.code;
            let mut prev_sig: Option<char> = None;
            for (i, c) in code.iter().enumerate() {
                let prev = i.checked_sub(1).map(|p| code[p]);
                if (*c == '&' || *c == '*') && starts_node(prev_sig, prev) {
                    let name: String = code[i + 1..]
                        .iter()
                        .take_while(|n| !n.is_whitespace() && !is_flow_indicator(**n))
                        .collect();
                    if !name.is_empty() {
                        if *c == '&' {
                            declared.insert(name);
                        } else if !declared.contains(&name) {
                            problems.push(Problem::new(
                                line.number,
                                i + 1,
                                self.id(),
                                self.level,
                                format!("found undeclared alias \"{}\"", name),
                            ));
                        }
                    }
                }
                if !c.is_whitespace() {
                    prev_sig = Some(*c);
                }
            }
        }

        problems
    }
}

fn is_flow_indicator(c: char) -> bool {
    matches!(c, ',' | '[' | ']' | '{' | '}')
}
