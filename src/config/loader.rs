use super::traits::ConfigSection;
use crate::data::ShapePolicy;
use crate::error::EvostatsError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Glob pattern relative to a group directory.
    pub pattern: String,
    /// Zero-based column holding the fitness value.
    pub value_column: usize,
    pub shape_policy: ShapePolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            pattern: "*/*/bestfit.dat".to_string(),
            value_column: 1,
            shape_policy: ShapePolicy::Strict,
        }
    }
}

impl ConfigSection for LoaderConfig {
    fn section_name() -> &'static str {
        "loader"
    }

    fn validate(&self) -> Result<(), EvostatsError> {
        if self.pattern.trim().is_empty() {
            return Err(EvostatsError::Configuration(
                "Loader pattern must not be empty".to_string()
            ));
        }
        if let Err(e) = glob::Pattern::new(&self.pattern) {
            return Err(EvostatsError::Configuration(format!(
                "Invalid loader pattern '{}': {}",
                self.pattern, e
            )));
        }
        Ok(())
    }
}
