//! Lint rule configuration
//!
//! `LintConfig::default()` is the default style profile. The structure is
//! deserializable so a profile can also be described in YAML, with every
//! omitted field falling back to its default.

use serde::{Deserialize, Serialize};

use crate::Level;

/// Options for every rule known to the linter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LintConfig {
    pub anchors: RuleToggle,
    pub braces: SpacingInsideConfig,
    pub brackets: SpacingInsideConfig,
    pub colons: ColonsConfig,
    pub commas: CommasConfig,
    pub comments: CommentsConfig,
    pub comments_indentation: RuleToggle,
    pub document_start: RuleToggle,
    pub empty_lines: EmptyLinesConfig,
    pub hyphens: HyphensConfig,
    pub indentation: IndentationConfig,
    pub key_duplicates: RuleToggle,
    pub line_length: LineLengthConfig,
    pub new_line_at_end_of_file: RuleToggle,
    pub new_lines: RuleToggle,
    pub trailing_spaces: RuleToggle,
    pub truthy: TruthyConfig,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            anchors: RuleToggle::error(),
            braces: SpacingInsideConfig::default(),
            brackets: SpacingInsideConfig::default(),
            colons: ColonsConfig::default(),
            commas: CommasConfig::default(),
            comments: CommentsConfig::default(),
            comments_indentation: RuleToggle::warning(),
            document_start: RuleToggle::warning(),
            empty_lines: EmptyLinesConfig::default(),
            hyphens: HyphensConfig::default(),
            indentation: IndentationConfig::default(),
            key_duplicates: RuleToggle::error(),
            line_length: LineLengthConfig::default(),
            new_line_at_end_of_file: RuleToggle::error(),
            new_lines: RuleToggle::error(),
            trailing_spaces: RuleToggle::error(),
            truthy: TruthyConfig::default(),
        }
    }
}

impl LintConfig {
    /// Load a profile from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

/// Rule without options
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RuleToggle {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub level: Level,
}

impl RuleToggle {
    pub fn error() -> Self {
        Self {
            enabled: true,
            level: Level::Error,
        }
    }

    pub fn warning() -> Self {
        Self {
            enabled: true,
            level: Level::Warning,
        }
    }
}

impl Default for RuleToggle {
    fn default() -> Self {
        Self::error()
    }
}

/// Spaces allowed just inside `{ }` or `[ ]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SpacingInsideConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub level: Level,

    #[serde(default)]
    pub max_spaces_inside: usize,

    #[serde(default)]
    pub max_spaces_inside_empty: usize,
}

impl Default for SpacingInsideConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Error,
            max_spaces_inside: 0,
            max_spaces_inside_empty: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ColonsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub level: Level,

    #[serde(default)]
    pub max_spaces_before: usize,

    #[serde(default = "default_one")]
    pub max_spaces_after: usize,
}

impl Default for ColonsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Error,
            max_spaces_before: 0,
            max_spaces_after: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommasConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub level: Level,

    #[serde(default)]
    pub max_spaces_before: usize,

    #[serde(default = "default_one")]
    pub min_spaces_after: usize,

    #[serde(default = "default_one")]
    pub max_spaces_after: usize,
}

impl Default for CommasConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Error,
            max_spaces_before: 0,
            min_spaces_after: 1,
            max_spaces_after: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CommentsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_warning")]
    pub level: Level,

    #[serde(default = "default_true")]
    pub require_starting_space: bool,

    #[serde(default = "default_true")]
    pub ignore_shebangs: bool,

    #[serde(default = "default_two")]
    pub min_spaces_from_content: usize,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Warning,
            require_starting_space: true,
            ignore_shebangs: true,
            min_spaces_from_content: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EmptyLinesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub level: Level,

    #[serde(default = "default_two")]
    pub max: usize,

    #[serde(default)]
    pub max_start: usize,

    #[serde(default)]
    pub max_end: usize,
}

impl Default for EmptyLinesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Error,
            max: 2,
            max_start: 0,
            max_end: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HyphensConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub level: Level,

    #[serde(default = "default_one")]
    pub max_spaces_after: usize,
}

impl Default for HyphensConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Error,
            max_spaces_after: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IndentationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub level: Level,

    /// Fixed indentation width; `None` means consistent with the first
    /// indentation found in the document
    #[serde(default)]
    pub spaces: Option<usize>,

    /// Block sequences must be indented under their parent key
    #[serde(default = "default_true")]
    pub indent_sequences: bool,
}

impl Default for IndentationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Error,
            spaces: None,
            indent_sequences: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LineLengthConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub level: Level,

    #[serde(default = "default_max_line")]
    pub max: usize,

    #[serde(default = "default_true")]
    pub allow_non_breakable_words: bool,
}

impl Default for LineLengthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Error,
            max: default_max_line(),
            allow_non_breakable_words: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TruthyConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_warning")]
    pub level: Level,

    #[serde(default = "default_allowed_truthy")]
    pub allowed_values: Vec<String>,

    #[serde(default = "default_true")]
    pub check_keys: bool,
}

impl Default for TruthyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Warning,
            allowed_values: default_allowed_truthy(),
            check_keys: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_one() -> usize {
    1
}

fn default_two() -> usize {
    2
}

fn default_max_line() -> usize {
    80
}

fn default_warning() -> Level {
    Level::Warning
}

fn default_allowed_truthy() -> Vec<String> {
    vec!["true".to_string(), "false".to_string()]
}
