use super::{
    comparison::ComparisonConfig,
    groups::{default_groups, validate_groups, GroupConfig},
    loader::LoaderConfig,
    output::OutputConfig,
    traits::ConfigSection,
};
use crate::error::EvostatsError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Environment variables prefixed with this override file values,
/// e.g. `EVOSTATS__COMPARISON__GENERATION=250`.
pub const ENV_PREFIX: &str = "EVOSTATS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub groups: Vec<GroupConfig>,
    pub loader: LoaderConfig,
    pub comparison: ComparisonConfig,
    pub output: OutputConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            groups: default_groups(),
            loader: LoaderConfig::default(),
            comparison: ComparisonConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), EvostatsError> {
        validate_groups(&self.groups)?;
        self.loader.validate()?;
        self.comparison.validate()?;
        self.output.validate()?;

        for name in [&self.comparison.baseline, &self.comparison.treatment] {
            if self.group(name).is_none() {
                return Err(EvostatsError::Configuration(format!(
                    "{} refers to unknown group '{}'",
                    ComparisonConfig::section_name(),
                    name
                )));
            }
        }
        Ok(())
    }

    pub fn group(&self, name: &str) -> Option<&GroupConfig> {
        self.groups.iter().find(|g| g.name == name)
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AnalysisConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AnalysisConfig::default())),
        }
    }

    /// Read a TOML or JSON file (by extension), apply `EVOSTATS__*`
    /// overrides, validate, and replace the current configuration.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EvostatsError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| EvostatsError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AnalysisConfig = settings
            .try_deserialize()
            .map_err(|e| EvostatsError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.write_lock()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EvostatsError> {
        let config = self.get()?;
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| EvostatsError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| EvostatsError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> Result<AnalysisConfig, EvostatsError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| EvostatsError::Configuration("Config lock poisoned".to_string()))
    }

    pub fn update<F>(&self, f: F) -> Result<(), EvostatsError>
    where
        F: FnOnce(&mut AnalysisConfig),
    {
        let mut guard = self.write_lock()?;
        let mut candidate = guard.clone();
        f(&mut candidate);
        candidate.validate()?;
        *guard = candidate;
        Ok(())
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, AnalysisConfig>, EvostatsError> {
        self.config
            .write()
            .map_err(|_| EvostatsError::Configuration("Config lock poisoned".to_string()))
    }
}
