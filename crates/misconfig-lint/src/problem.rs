//! Lint findings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a lint finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Warning,
    #[default]
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single finding reported by a lint rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// 1-based line number
    pub line: usize,

    /// 1-based column
    pub column: usize,

    /// Identifier of the rule that reported it
    pub rule: &'static str,

    pub level: Level,

    pub message: String,
}

impl Problem {
    pub fn new(
        line: usize,
        column: usize,
        rule: &'static str,
        level: Level,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            rule,
            level,
            message: message.into(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: [{}] {} ({})",
            self.line, self.column, self.level, self.message, self.rule
        )
    }
}
