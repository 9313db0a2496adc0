//! YAML values to JSON values
//!
//! Loaded YAML is converted into the same value model as JSON input so the
//! rest of the pipeline handles one representation. Mapping keys that are
//! not strings are rendered to their scalar text; values JSON cannot carry
//! (tagged nodes, non-finite floats) are rejected.

use misconfig_core::{Error, Result};
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

/// Convert a loaded YAML value, recursively
pub fn yaml_to_json(value: YamlValue) -> Result<Value> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                Number::from_f64(f).map(Value::Number).ok_or_else(|| {
                    Error::parse(format!("number {} cannot be represented in a policy", n))
                })?
            }
        }
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(key_text(key)?, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        YamlValue::Tagged(tagged) => {
            return Err(Error::parse(format!(
                "unsupported tag {} in configuration",
                tagged.tag
            )))
        }
    })
}

fn key_text(key: YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => Err(Error::parse(
            "complex mapping keys are not supported".to_string(),
        )),
        YamlValue::Tagged(tagged) => Err(Error::parse(format!(
            "unsupported tag {} on mapping key",
            tagged.tag
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(yaml: &str) -> Result<Value> {
        yaml_to_json(serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_scalars_and_collections() {
        let value = convert("a: 1\nb: -2\nc: 1.5\nd: [x, true, null]\ne: {f: g}\n").unwrap();
        assert_eq!(
            value,
            json!({"a": 1, "b": -2, "c": 1.5, "d": ["x", true, null], "e": {"f": "g"}})
        );
    }

    #[test]
    fn test_key_order_preserved() {
        let value = convert("zeta: 1\nalpha: 2\nmid: 3\n").unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_non_string_keys_rendered() {
        let value = convert("1: one\ntrue: yes\n~: nothing\n").unwrap();
        assert_eq!(value, json!({"1": "one", "true": "yes", "null": "nothing"}));
    }

    #[test]
    fn test_tagged_value_rejected() {
        let err = convert("a: !custom 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = convert("a: .nan\n").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
