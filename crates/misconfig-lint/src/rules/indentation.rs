//! Block indentation
//!
//! Tracks the columns of open block nodes. A line nested under a key or a
//! bare hyphen must sit exactly one indentation unit deeper than its owner;
//! any other structural line must return to a column that is still open.
//! The unit is fixed by configuration or by the first nesting found.

use super::LintRule;
use crate::config::IndentationConfig;
use crate::scanner::{Document, Line, LineKind};
use crate::{Level, Problem};

const ID: &str = "indentation";

pub struct Indentation {
    level: Level,
    spaces: Option<usize>,
    indent_sequences: bool,
}

/// Node whose block value starts on the next structural line
#[derive(Debug, Clone, Copy)]
struct Owner {
    column: usize,
    is_key: bool,
}

impl Indentation {
    pub fn new(config: &IndentationConfig) -> Self {
        Self {
            level: config.level,
            spaces: config.spaces,
            indent_sequences: config.indent_sequences,
        }
    }

    fn wrong(&self, line: &Line, expected: usize) -> Problem {
        Problem::new(
            line.number,
            line.indent + 1,
            ID,
            self.level,
            format!(
                "wrong indentation: expected {} but found {}",
                expected, line.indent
            ),
        )
    }
}

impl LintRule for Indentation {
    fn id(&self) -> &'static str {
        ID
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();
        let mut unit = self.spaces;
        let mut levels: Vec<usize> = Vec::new();
        let mut owner: Option<Owner> = None;

        for line in &doc.lines {
            match line.kind {
                LineKind::DocumentStart | LineKind::DocumentEnd => {
                    levels.clear();
                    owner = None;
                    continue;
                }
                LineKind::Content if line.flow_depth == 0 => {}
                _ => continue,
            }

            if line.text.chars().nth(line.indent) == Some('\t') {
                problems.push(Problem::new(
                    line.number,
                    line.indent + 1,
                    ID,
                    self.level,
                    "found tab character in indentation",
                ));
                owner = None;
                continue;
            }

            let is_seq = line.is_sequence_item();
            // Plain scalar values and their continuation lines carry no
            // block structure of their own.
            if !is_seq && line.key_colon().is_none() {
                owner = None;
                continue;
            }

            let found = line.indent;
            let nested =
                owner.filter(|o| found > o.column || (o.is_key && is_seq && found == o.column));

            if let Some(o) = nested {
                let step = match unit {
                    Some(step) => step,
                    None if found > o.column => {
                        unit = Some(found - o.column);
                        found - o.column
                    }
                    None => 2,
                };
                let flush_sequence = o.is_key && is_seq && found == o.column;
                if !(flush_sequence && !self.indent_sequences) && found != o.column + step {
                    problems.push(self.wrong(line, o.column + step));
                }
                levels.retain(|c| *c <= o.column);
            } else {
                while levels.last().map_or(false, |c| *c > found) {
                    levels.pop();
                }
                match levels.last() {
                    Some(&c) if c == found => {}
                    Some(&c) => problems.push(self.wrong(line, c)),
                    None if found != 0 => problems.push(self.wrong(line, 0)),
                    None => {}
                }
            }

            push_level(&mut levels, found);
            for col in line.hyphens() {
                push_level(&mut levels, col);
            }
            push_level(&mut levels, line.node_indent());

            owner = if line.opens_block() {
                if line.key_colon().is_some() {
                    Some(Owner {
                        column: line.node_indent(),
                        is_key: true,
                    })
                } else {
                    line.hyphens().last().map(|col| Owner {
                        column: *col,
                        is_key: false,
                    })
                }
            } else {
                None
            };
        }

        problems
    }
}

fn push_level(levels: &mut Vec<usize>, column: usize) {
    if levels.last().map_or(true, |c| *c < column) {
        levels.push(column);
    }
}
