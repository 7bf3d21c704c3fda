use super::traits::ConfigSection;
use crate::error::EvostatsError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub baseline: String,
    pub treatment: String,
    pub generation: usize,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            baseline: "low_mut".to_string(),
            treatment: "high_mut".to_string(),
            generation: 100,
        }
    }
}

impl ConfigSection for ComparisonConfig {
    fn section_name() -> &'static str {
        "comparison"
    }

    fn validate(&self) -> Result<(), EvostatsError> {
        if self.baseline == self.treatment {
            return Err(EvostatsError::Configuration(format!(
                "Comparison needs two different groups, got '{}' twice",
                self.baseline
            )));
        }
        Ok(())
    }
}
