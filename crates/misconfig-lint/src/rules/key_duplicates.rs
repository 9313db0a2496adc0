//! Duplicate keys in block mappings

use std::collections::HashSet;

use super::LintRule;
use crate::config::RuleToggle;
use crate::scanner::{Document, LineKind};
use crate::{Level, Problem};

pub struct KeyDuplicates {
    level: Level,
}

impl KeyDuplicates {
    pub fn new(config: &RuleToggle) -> Self {
        Self {
            level: config.level,
        }
    }
}

impl LintRule for KeyDuplicates {
    fn id(&self) -> &'static str {
        "key-duplicates"
    }

    fn check(&self, doc: &Document) -> Vec<Problem> {
        let mut problems = Vec::new();
        // Open mappings, innermost last, keyed by column.
        let mut scopes: Vec<(usize, HashSet<String>)> = Vec::new();

        for line in &doc.lines {
            if matches!(line.kind, LineKind::DocumentStart | LineKind::DocumentEnd) {
                scopes.clear();
                continue;
            }
            if !line.is_structural() {
                continue;
            }

            // A new sequence entry closes the mappings of the previous one.
            if let Some(&first) = line.hyphens().first() {
                scopes.retain(|(col, _)| *col <= first);
            }

            let Some((column, key)) = line.key() else {
                continue;
            };
            scopes.retain(|(col, _)| *col <= column);

            // Merge keys may repeat.
            if key == "<<" {
                continue;
            }

            match scopes.last_mut() {
                Some((col, keys)) if *col == column => {
                    if !keys.insert(key.clone()) {
                        problems.push(Problem::new(
                            line.number,
                            column + 1,
                            self.id(),
                            self.level,
                            format!("duplication of key \"{}\" in mapping", key),
                        ));
                    }
                }
                _ => scopes.push((column, HashSet::from([key]))),
            }
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::positions;

    fn rule() -> KeyDuplicates {
        KeyDuplicates::new(&RuleToggle::error())
    }

    #[test]
    fn test_unique_keys() {
        let text = "---\na:\n  x: 1\nb:\n  x: 2\nlist:\n  - x: 1\n  - x: 2\n";
        assert!(positions(&rule(), text).is_empty());
    }

    #[test]
    fn test_duplicate_top_level() {
        assert_eq!(positions(&rule(), "---\nport: 1\nhost: a\nport: 2\n"), vec![(4, 1)]);
    }

    #[test]
    fn test_duplicate_nested_and_quoted() {
        let text = "---\na:\n  x: 1\n  \"x\": 2\n";
        assert_eq!(positions(&rule(), text), vec![(4, 3)]);
    }

    #[test]
    fn test_duplicate_inside_sequence_item() {
        let text = "---\n- name: a\n  name: b\n";
        assert_eq!(positions(&rule(), text), vec![(3, 3)]);
    }

    #[test]
    fn test_documents_are_independent() {
        assert!(positions(&rule(), "---\na: 1\n---\na: 2\n").is_empty());
    }

    #[test]
    fn test_merge_keys_allowed() {
        let text = "---\nbase: &b {x: 1}\nc:\n  <<: *b\n  <<: *b\n";
        assert!(positions(&rule(), text).is_empty());
    }
}
