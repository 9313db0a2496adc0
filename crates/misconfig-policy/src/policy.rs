//! Policy document and rule generation

use misconfig_core::ConfigMapping;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generated security policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Policy title
    pub policy_name: String,

    /// One rule per top-level configuration key, in source order
    pub rules: Vec<Rule>,

    /// Generator identification
    pub metadata: PolicyMetadata,
}

/// A single generated rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// `Check <key>`
    pub rule_name: String,

    /// `Ensure <key> is configured correctly.`
    pub description: String,

    /// The configured value, verbatim
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    pub generated_by: String,
    pub version: String,
}

/// Fixed text stamped on every generated policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTemplate {
    pub policy_name: String,
    pub generated_by: String,
    pub version: String,
}

impl Default for PolicyTemplate {
    fn default() -> Self {
        Self {
            policy_name: "Generated Security Policy".to_string(),
            generated_by: "misconfig-Policy-Generator".to_string(),
            version: "1.0".to_string(),
        }
    }
}

impl PolicyTemplate {
    /// Build a policy with one rule per top-level entry
    pub fn generate(&self, config: &ConfigMapping) -> Policy {
        Policy {
            policy_name: self.policy_name.clone(),
            rules: config
                .iter()
                .map(|(key, value)| Rule::for_key(key, value.clone()))
                .collect(),
            metadata: PolicyMetadata {
                generated_by: self.generated_by.clone(),
                version: self.version.clone(),
            },
        }
    }
}

impl Rule {
    /// Rule checking a single configuration key
    pub fn for_key(key: &str, value: Value) -> Self {
        Self {
            rule_name: format!("Check {}", key),
            description: format!("Ensure {} is configured correctly.", key),
            value,
        }
    }
}

/// Generate a policy with the default template
pub fn generate_policy(config: &ConfigMapping) -> Policy {
    PolicyTemplate::default().generate(config)
}
