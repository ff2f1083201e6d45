use lpx_model::Tags;
use serde::{Deserialize, Serialize};

/// Encoder configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Host identifier put on every line. Discovered from the OS when unset.
    pub host: Option<String>,
    /// Tags added to every line. Tags passed to an encode call override these.
    pub tags: Tags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = EncoderConfig::default();

        assert!(config.host.is_none());
        assert!(config.tags.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let mut tags = Tags::new();
        tags.insert("dc", "fra1");
        let config = EncoderConfig {
            host: Some("sensor-01".into()),
            tags,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: EncoderConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let config: EncoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EncoderConfig::default());
    }

    #[test]
    fn partial_deserialization() {
        let json = r#"{"tags": {"env": "prod"}}"#;
        let config: EncoderConfig = serde_json::from_str(json).unwrap();

        assert!(config.host.is_none());
        assert_eq!(config.tags.get("env"), Some("prod"));
    }
}
