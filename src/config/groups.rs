use crate::error::EvostatsError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// One experiment group: a directory of runs sharing a treatment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    pub label: String,
    pub directory: PathBuf,
}

impl GroupConfig {
    pub fn new(name: &str, label: &str, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            directory: directory.into(),
        }
    }
}

pub fn default_groups() -> Vec<GroupConfig> {
    vec![
        GroupConfig::new("low_mut", "Low mutation rate", "data/low_mut"),
        GroupConfig::new("high_mut", "High mutation rate", "data/high_mut"),
    ]
}

pub fn validate_groups(groups: &[GroupConfig]) -> Result<(), EvostatsError> {
    if groups.is_empty() {
        return Err(EvostatsError::Configuration(
            "At least one group is required".to_string()
        ));
    }

    let mut seen = HashSet::new();
    for group in groups {
        if group.name.trim().is_empty() {
            return Err(EvostatsError::Configuration(
                "Group names must not be empty".to_string()
            ));
        }
        if !seen.insert(group.name.as_str()) {
            return Err(EvostatsError::Configuration(format!(
                "Duplicate group name '{}'",
                group.name
            )));
        }
    }
    Ok(())
}
