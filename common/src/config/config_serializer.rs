use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// A blank document reads as an empty mapping, so `#[serde(default)]` configs fall back to defaults.
    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        let document = if content.trim().is_empty() { "{}" } else { content };
        serde_yaml_ng::from_str(document)
            .map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}
