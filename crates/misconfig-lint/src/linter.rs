//! Rule registry and lint entry point

use tracing::debug;

use crate::config::LintConfig;
use crate::rules::{
    Anchors, Colons, Commas, Comments, CommentsIndentation, DocumentStart, EmptyLines,
    FlowSpacing, Hyphens, Indentation, KeyDuplicates, LineLength, LintRule, NewLineAtEndOfFile,
    NewLines, TrailingSpaces, Truthy,
};
use crate::scanner::Document;
use crate::Problem;

/// Runs the enabled rules of a profile over YAML text
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
}

impl Linter {
    /// Build the rule set described by a profile
    pub fn new(config: &LintConfig) -> Self {
        let mut rules: Vec<Box<dyn LintRule>> = Vec::new();

        if config.anchors.enabled {
            rules.push(Box::new(Anchors::new(&config.anchors)));
        }
        if config.braces.enabled {
            rules.push(Box::new(FlowSpacing::braces(&config.braces)));
        }
        if config.brackets.enabled {
            rules.push(Box::new(FlowSpacing::brackets(&config.brackets)));
        }
        if config.colons.enabled {
            rules.push(Box::new(Colons::new(&config.colons)));
        }
        if config.commas.enabled {
            rules.push(Box::new(Commas::new(&config.commas)));
        }
        if config.comments.enabled {
            rules.push(Box::new(Comments::new(&config.comments)));
        }
        if config.comments_indentation.enabled {
            rules.push(Box::new(CommentsIndentation::new(&config.comments_indentation)));
        }
        if config.document_start.enabled {
            rules.push(Box::new(DocumentStart::new(&config.document_start)));
        }
        if config.empty_lines.enabled {
            rules.push(Box::new(EmptyLines::new(&config.empty_lines)));
        }
        if config.hyphens.enabled {
            rules.push(Box::new(Hyphens::new(&config.hyphens)));
        }
        if config.indentation.enabled {
            rules.push(Box::new(Indentation::new(&config.indentation)));
        }
        if config.key_duplicates.enabled {
            rules.push(Box::new(KeyDuplicates::new(&config.key_duplicates)));
        }
        if config.line_length.enabled {
            rules.push(Box::new(LineLength::new(&config.line_length)));
        }
        if config.new_line_at_end_of_file.enabled {
            rules.push(Box::new(NewLineAtEndOfFile::new(&config.new_line_at_end_of_file)));
        }
        if config.new_lines.enabled {
            rules.push(Box::new(NewLines::new(&config.new_lines)));
        }
        if config.trailing_spaces.enabled {
            rules.push(Box::new(TrailingSpaces::new(&config.trailing_spaces)));
        }
        if config.truthy.enabled {
            rules.push(Box::new(Truthy::new(&config.truthy)));
        }

        debug!("Linter initialized with {} rules", rules.len());
        Self { rules }
    }

    /// Identifiers of the enabled rules
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Lint YAML text, returning every finding ordered by position
    pub fn run(&self, text: &str) -> Vec<Problem> {
        let doc = Document::parse(text);

        let mut problems: Vec<Problem> = self
            .rules
            .iter()
            .flat_map(|rule| rule.check(&doc))
            .collect();
        problems.sort_by(|a, b| (a.line, a.column, a.rule).cmp(&(b.line, b.column, b.rule)));

        for problem in &problems {
            debug!("{}", problem);
        }
        problems
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(&LintConfig::default())
    }
}
