//! Configuration loading and validation

use misconfig_core::{value_kind, ConfigMapping, Error, InputFormat, Result};
use misconfig_lint::{LintConfig, Linter};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, error, info};

use crate::convert::yaml_to_json;

/// Reads configuration files and validates their syntax
pub struct ConfigLoader {
    linter: Linter,
}

impl ConfigLoader {
    /// Create a loader linting YAML with the given profile
    pub fn new(lint: &LintConfig) -> Self {
        Self {
            linter: Linter::new(lint),
        }
    }

    /// Load a configuration file.
    ///
    /// The format comes from the extension and is checked before the file
    /// is opened.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<ConfigMapping> {
        let path = path.as_ref();
        let format = InputFormat::from_path(path)?;

        info!("Validating {} file: {}", format, path.display());
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        self.parse(&text, format)
    }

    /// Validate and parse configuration text
    pub fn parse(&self, text: &str, format: InputFormat) -> Result<ConfigMapping> {
        let value = match format {
            InputFormat::Json => parse_json(text),
            InputFormat::Yaml => self.parse_yaml(text),
        }
        .map_err(|e| {
            error!("{} validation failed: {}", format, e);
            e
        })?;

        into_mapping(value)
    }

    /// Lint, then safe-load YAML text
    fn parse_yaml(&self, text: &str) -> Result<Value> {
        let problems = self.linter.run(text);
        if !problems.is_empty() {
            return Err(Error::validation(problems.iter().map(ToString::to_string)));
        }
        debug!("YAML lint passed");

        let value: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| Error::parse(e.to_string()))?;

        yaml_to_json(value)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(&LintConfig::default())
    }
}

/// Parse JSON text
pub fn parse_json(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Require a top-level mapping
pub fn into_mapping(value: Value) -> Result<ConfigMapping> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::type_error(format!(
            "expected a top-level mapping, found {}",
            value_kind(&other)
        ))),
    }
}
