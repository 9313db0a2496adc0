//! Error types for the policy generator

use std::path::{Path, PathBuf};

/// Result type alias using the generator's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by any stage of the load, generate, render pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input extension or output format token not recognized
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// File missing, unreadable or unwritable
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON or YAML syntax
    #[error("parse error: {0}")]
    Parse(String),

    /// YAML lint findings present
    #[error("YAML validation failed with {} finding(s): {}", .0.len(), .0.join("; "))]
    Validation(Vec<String>),

    /// Parsed root is not a mapping
    #[error("type error: {0}")]
    Type(String),

    /// Policy document could not be rendered
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create a new unsupported format error
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Wrap an io error with the path it occurred on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new validation error from rendered findings
    pub fn validation<I, S>(findings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation(findings.into_iter().map(Into::into).collect())
    }

    /// Create a new type error
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    /// Create a new serialization error
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Short, stable name of the error kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat(_) => "unsupported_format",
            Self::Io { .. } => "io",
            Self::Parse(_) => "parse",
            Self::Validation(_) => "validation",
            Self::Type(_) => "type",
            Self::Serialization(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        // Display already carries the line and column.
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_findings() {
        let err = Error::validation(["1:1: a", "2:3: b"]);
        let msg = err.to_string();
        assert!(msg.contains("2 finding(s)"));
        assert!(msg.contains("1:1: a; 2:3: b"));
        assert_eq!(err.kind(), "validation");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = Error::io(
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing.json"));
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_json_error_carries_position() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\"a\": 1,}").unwrap_err();
        let err: Error = json_err.into();
        assert_eq!(err.kind(), "parse");
        assert!(err.to_string().contains("line 1"));
    }
}
