use crate::error::{RegistryError, Result};
use crate::idgen::{FixedId, IdGenerator, RandomId, SequentialId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "rolodex.json";

/// Configuration for a registry, stored in rolodex.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RegistryConfig {
    /// Identifier-generation strategy for new contacts.
    #[serde(default)]
    pub generator: GeneratorKind,
}

/// Which [`IdGenerator`] implementation a registry should use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Counting integers, starting from `start`.
    Sequential {
        #[serde(default)]
        start: u64,
    },
    /// Random UUIDs.
    #[default]
    Random,
    /// A constant value. Only sensible in tests.
    Fixed { value: String },
}

impl GeneratorKind {
    /// Construct the generator this configuration describes.
    pub fn build(&self) -> Box<dyn IdGenerator> {
        match self {
            GeneratorKind::Sequential { start } => Box::new(SequentialId::starting_at(*start)),
            GeneratorKind::Random => Box::new(RandomId::new()),
            GeneratorKind::Fixed { value } => Box::new(FixedId::new(value.clone())),
        }
    }
}

impl RegistryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RegistryError::Io)?;
        let config: RegistryConfig =
            serde_json::from_str(&content).map_err(RegistryError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        // Ensure directory exists
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RegistryError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RegistryError::Serialization)?;
        fs::write(config_path, content).map_err(RegistryError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RegistryConfig::load(dir.path()).unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.generator, GeneratorKind::Random);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let config = RegistryConfig {
            generator: GeneratorKind::Sequential { start: 42 },
        };
        config.save(dir.path()).unwrap();
        assert_eq!(RegistryConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn malformed_config_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        let err = RegistryConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, RegistryError::Serialization(_)));
    }

    #[test]
    fn kind_field_selects_the_strategy() {
        let json = r#"{ "generator": { "kind": "fixed", "value": "X" } }"#;
        let config: RegistryConfig = serde_json::from_str(json).unwrap();
        let mut gen = config.generator.build();
        assert_eq!(gen.next_id(), "X");
    }

    #[test]
    fn built_sequential_generator_honours_start() {
        let mut gen = GeneratorKind::Sequential { start: 9 }.build();
        assert_eq!(gen.next_id(), "9");
        assert_eq!(gen.next_id(), "10");
    }
}
