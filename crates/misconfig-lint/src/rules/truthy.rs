//! Ambiguous boolean spellings in plain scalars

use super::{code_lines, LintRule};
use crate::config::TruthyConfig;
use crate::scanner::{is_value_boundary, Document, Line, LineKind};
use crate::{Level, Problem};

/// Plain scalars a YAML 1.1 loader reads as booleans
const TRUTHY: [&str; 18] = [
    "YES", "Yes", "yes", "NO", "No", "no", "TRUE", "True", "true", "FALSE", "False", "false",
    "ON", "On", "on", "OFF", "Off", "off",
];

pub struct Truthy {
    level: Level,
    allowed: Vec<String>,
    check_keys: bool,
    message: String,
}

impl Truthy {
    pub fn new(config: &TruthyConfig) -> Self {
        let mut allowed = config.allowed_values.clone();
        allowed.sort();
        let message = format!("truthy value should be one of [{}]", allowed.join(", "));
        Self {
            level: config.level,
            allowed,
            check_keys: config.check_keys,
            message,
        }
    }
}

impl LintRule for Truthy {
    fn id(&self) -> &'static str {
        "truthy"
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();

        for line in code_lines(doc) {
            for scalar in plain_scalars(line) {
                if scalar.is_key && !self.check_keys {
                    continue;
                }
                if TRUTHY.contains(&scalar.text.as_str())
                    && !self.allowed.iter().any(|a| *a == scalar.text)
                {
                    problems.push(Problem::new(
                        line.number,
                        scalar.column + 1,
                        self.id(),
                        self.level,
                        self.message.clone(),
                    ));
                }
            }
        }

        problems
    }
}

#[derive(Debug, PartialEq, Eq)]
struct PlainScalar {
    column: usize,
    text: String,
    is_key: bool,
}

/// Untagged plain scalars on a line, split at flow indicators and mapping
/// colons
fn plain_scalars(line: &Line) -> Vec<PlainScalar> {
    let code = &line.code;
    let start = match line.kind {
        LineKind::DocumentStart => 3.min(code.len()),
        LineKind::Continuation => 0,
        _ => line.node_indent().min(code.len()),
    };

    let mut scalars = Vec::new();
    let mut seg_start = start;
    for i in start..=code.len() {
        let boundary = i == code.len()
            || matches!(code[i], '[' | ']' | '{' | '}' | ',')
            || (code[i] == ':' && is_value_boundary(code.get(i + 1).copied()));
        if !boundary {
            continue;
        }
        let is_key = i < code.len() && code[i] == ':';
        if let Some(scalar) = segment(code, seg_start, i, is_key) {
            scalars.push(scalar);
        }
        seg_start = i + 1;
    }

    scalars
}

fn segment(code: &[char], from: usize, to: usize, is_key: bool) -> Option<PlainScalar> {
    let mut column = from;
    while column < to && code[column].is_whitespace() {
        column += 1;
    }
    let mut text: String = code[column..to].iter().collect();
    text.truncate(text.trim_end().len());

    // Anchors are transparent, tags make the scalar explicitly typed.
    while text.starts_with('&') {
        let name_len = text.find(char::is_whitespace)?;
        let rest = &text[name_len..];
        let skipped = name_len + (rest.len() - rest.trim_start().len());
        column += text[..skipped].chars().count();
        text = text[skipped..].to_string();
    }
    if text.is_empty() || text.starts_with('!') {
        return None;
    }

    Some(PlainScalar {
        column,
        text,
        is_key,
    })
}
