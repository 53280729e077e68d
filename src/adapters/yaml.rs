// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser.

use crate::domain::{ConfigError, Result};
use crate::ports::ConfigParser;
use serde_json::Value;

/// YAML parser implementation.
///
/// YAML is read straight into a `serde_json::Value`, so anchors and aliases are
/// expanded and mapping keys must be strings.
///
/// # Examples
///
/// ```rust
/// use sitecfg::adapters::YamlParser;
/// use sitecfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let value = parser.parse("server:\n  host: 0.0.0.0\n  port: 5173").unwrap();
/// assert_eq!(value["server"]["host"], "0.0.0.0");
/// assert_eq!(value["server"]["port"], 5173);
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Value> {
        if content.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_nested() {
        let yaml = r#"
style:
  presets: [base]
  content:
    relative: true
    files:
      - "./pages/**/*.{html,js,svelte,ts,md}"
"#;
        let value = YamlParser::new().parse(yaml).unwrap();
        assert_eq!(value["style"]["presets"], json!(["base"]));
        assert_eq!(value["style"]["content"]["relative"], json!(true));
        assert_eq!(
            value["style"]["content"]["files"][0],
            json!("./pages/**/*.{html,js,svelte,ts,md}")
        );
    }

    #[test]
    fn test_unquoted_ip_is_string() {
        let value = YamlParser::new().parse("host: 0.0.0.0").unwrap();
        assert_eq!(value["host"], json!("0.0.0.0"));
    }

    #[test]
    fn test_empty_is_null() {
        assert_eq!(YamlParser::new().parse("  \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = YamlParser::new().parse("key: [unclosed");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_supported_extensions() {
        let parser = YamlParser::new();
        assert_eq!(parser.supported_extensions(), &["yaml", "yml"]);
        assert!(parser.supports("YML"));
    }
}
