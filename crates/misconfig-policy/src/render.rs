//! Policy serialization

use misconfig_core::{Error, OutputFormat, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::Policy;

const JSON_INDENT: &[u8] = b"    ";

/// Render a policy as text in the requested format
pub fn render(policy: &Policy, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(policy),
        OutputFormat::Yaml => render_yaml(policy),
    }
}

/// Render with a format named by string, as accepted on the command line
pub fn render_as(policy: &Policy, format: &str) -> Result<String> {
    render(policy, format.parse()?)
}

/// Pretty JSON with 4-space indentation
fn render_json(policy: &Policy) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    policy
        .serialize(&mut ser)
        .map_err(|e| Error::serialization(e.to_string()))?;

    let mut text = String::from_utf8(buf).map_err(|e| Error::serialization(e.to_string()))?;
    text.push('\n');
    Ok(text)
}

/// Block-style YAML, keys in generation order
fn render_yaml(policy: &Policy) -> Result<String> {
    serde_yaml::to_string(policy).map_err(|e| Error::serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_policy;
    use serde_json::{json, Value};

    fn sample() -> Policy {
        let config = json!({"port": 8080, "debug": true});
        generate_policy(config.as_object().unwrap())
    }

    #[test]
    fn test_json_shape() {
        let text = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed,
            json!({
                "policy_name": "Generated Security Policy",
                "rules": [
                    {
                        "rule_name": "Check port",
                        "description": "Ensure port is configured correctly.",
                        "value": 8080
                    },
                    {
                        "rule_name": "Check debug",
                        "description": "Ensure debug is configured correctly.",
                        "value": true
                    }
                ],
                "metadata": {"generated_by": "misconfig-Policy-Generator", "version": "1.0"}
            })
        );
    }

    #[test]
    fn test_json_four_space_indent_and_field_order() {
        let text = render(&sample(), OutputFormat::Json).unwrap();
        let head = concat!(
            "{\n",
            "    \"policy_name\": \"Generated Security Policy\",\n",
            "    \"rules\": [\n",
            "        {\n",
            "            \"rule_name\": \"Check port\",",
        );
        assert!(text.starts_with(head));
        let policy_at = text.find("\"policy_name\"").unwrap();
        let rules_at = text.find("\"rules\"").unwrap();
        let metadata_at = text.find("\"metadata\"").unwrap();
        assert!(policy_at < rules_at && rules_at < metadata_at);
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_yaml_block_style() {
        let text = render(&sample(), OutputFormat::Yaml).unwrap();
        assert!(text.starts_with(
            "policy_name: Generated Security Policy\nrules:\n- rule_name: Check port\n"
        ));
        assert!(!text.contains('{'));
        assert!(text.contains("  value: 8080\n"));
        assert!(text.contains("metadata:\n  generated_by: misconfig-Policy-Generator\n"));

        let back: Policy = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn test_render_as_rejects_unknown_format() {
        let err = render_as(&sample(), "xml").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
        assert!(render_as(&sample(), "yaml").is_ok());
    }
}
