//! End-to-end policy generation

use misconfig_core::{ConfigMapping, Error, OutputFormat, Result};
use misconfig_lint::LintConfig;
use std::path::Path;
use tracing::{debug, info};

use crate::{render, ConfigLoader, Policy, PolicyTemplate};

/// Load, generate, render and write in one pass
pub struct PolicyGenerator {
    loader: ConfigLoader,
    template: PolicyTemplate,
}

impl PolicyGenerator {
    /// Create a generator from a lint profile and policy template
    pub fn new(lint: &LintConfig, template: PolicyTemplate) -> Self {
        Self {
            loader: ConfigLoader::new(lint),
            template,
        }
    }

    /// Load and validate a configuration file
    pub fn load(&self, input: impl AsRef<Path>) -> Result<ConfigMapping> {
        self.loader.load(input)
    }

    /// Build the policy for a loaded configuration
    pub fn generate(&self, config: &ConfigMapping) -> Policy {
        info!("Generating security policy...");
        let policy = self.template.generate(config);
        debug!("Generated {} rules", policy.rules.len());
        policy
    }

    /// Run the whole pipeline.
    ///
    /// The output file is only created once every stage has succeeded.
    pub fn run(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        format: OutputFormat,
    ) -> Result<Policy> {
        let output = output.as_ref();

        let config = self.load(input)?;
        let policy = self.generate(&config);
        let text = render(&policy, format)?;

        std::fs::write(output, text).map_err(|e| Error::io(output, e))?;
        info!(
            "Security policy successfully generated and saved to {}",
            output.display()
        );

        Ok(policy)
    }
}

impl Default for PolicyGenerator {
    fn default() -> Self {
        Self::new(&LintConfig::default(), PolicyTemplate::default())
    }
}
