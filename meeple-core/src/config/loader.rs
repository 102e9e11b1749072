use std::collections::HashMap;
use std::path::Path;

use super::value::ConfigValue;
use super::ConfigError;

/// Load and parse a YAML file, flattening it into the values map.
///
/// A missing file is not an error.
pub(crate) fn load_yaml_file(
    path: &Path,
    values: &mut HashMap<String, ConfigValue>,
) -> Result<(), ConfigError> {
    if path.exists() {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Load(e.to_string()))?;
        load_yaml_str(&content, values)?;
    }
    Ok(())
}

/// Parse a YAML string and flatten it into the values map.
pub(crate) fn load_yaml_str(
    content: &str,
    values: &mut HashMap<String, ConfigValue>,
) -> Result<(), ConfigError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))?;
    flatten_yaml("", &yaml, values);
    Ok(())
}

/// Flatten a YAML tree into dot-separated keys.
fn flatten_yaml(prefix: &str, value: &serde_yaml::Value, out: &mut HashMap<String, ConfigValue>) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (k, v) in map {
                let key_str = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    other => format!("{other:?}"),
                };
                let full_key = if prefix.is_empty() {
                    key_str
                } else {
                    format!("{prefix}.{key_str}")
                };
                flatten_yaml(&full_key, v, out);
            }
        }
        leaf => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), ConfigValue::from_yaml(leaf));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_mappings_become_dotted_keys() {
        let mut values = HashMap::new();
        load_yaml_str("app:\n  server:\n    addr: \"127.0.0.1:1\"\n", &mut values).unwrap();
        assert!(matches!(
            values.get("app.server.addr"),
            Some(ConfigValue::String(s)) if s == "127.0.0.1:1"
        ));
    }

    #[test]
    fn missing_file_is_ignored() {
        let mut values = HashMap::new();
        load_yaml_file(Path::new("does-not-exist.yaml"), &mut values).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn invalid_yaml_is_a_load_error() {
        let mut values = HashMap::new();
        let err = load_yaml_str("app: [unclosed", &mut values).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
