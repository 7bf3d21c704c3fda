use super::traits::ConfigSection;
use crate::error::EvostatsError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub write_csv: bool,
    pub write_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("results"),
            write_csv: true,
            write_json: true,
        }
    }
}

impl ConfigSection for OutputConfig {
    fn section_name() -> &'static str {
        "output"
    }

    fn validate(&self) -> Result<(), EvostatsError> {
        if (self.write_csv || self.write_json) && self.directory.as_os_str().is_empty() {
            return Err(EvostatsError::Configuration(
                "Output directory must be set when exports are enabled".to_string()
            ));
        }
        Ok(())
    }
}
