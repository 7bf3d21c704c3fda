use crate::config::{AnalysisConfig, GroupConfig};
use crate::data::{DatasetLoader, ExperimentGroupMatrix};
use crate::error::{EvostatsError, Result};
use crate::report::{ComparisonReport, SummaryExporter};
use crate::stats::{ColumnAggregator, ColumnStatistics};
use std::path::PathBuf;

/// A loaded and summarised experiment group.
#[derive(Debug, Clone)]
pub struct GroupOutcome {
    pub group: GroupConfig,
    pub matrix: ExperimentGroupMatrix,
    pub statistics: ColumnStatistics,
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub groups: Vec<GroupOutcome>,
    pub comparison: ComparisonReport,
    pub written: Vec<PathBuf>,
}

impl AnalysisOutcome {
    pub fn group(&self, name: &str) -> Option<&GroupOutcome> {
        self.groups.iter().find(|g| g.group.name == name)
    }
}

/// Load every configured group, summarise it, compare the configured pair
/// and write the enabled exports.
pub struct Analysis {
    config: AnalysisConfig,
    loader: DatasetLoader,
}

impl Analysis {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let loader = DatasetLoader::new(config.loader.clone());
        Ok(Self { config, loader })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn run(&self) -> Result<AnalysisOutcome> {
        let groups = self
            .config
            .groups
            .iter()
            .map(|group| self.summarize_group(group))
            .collect::<Result<Vec<_>>>()?;

        let comparison = self.compare(&groups)?;
        log::info!("{}", comparison.summary());

        let written = self.export(&groups, &comparison)?;

        Ok(AnalysisOutcome {
            groups,
            comparison,
            written,
        })
    }

    fn summarize_group(&self, group: &GroupConfig) -> Result<GroupOutcome> {
        let matrix = self.loader.load(&group.directory)?;
        let statistics = ColumnAggregator::column_statistics(&matrix)?;
        Ok(GroupOutcome {
            group: group.clone(),
            matrix,
            statistics,
        })
    }

    fn compare(&self, groups: &[GroupOutcome]) -> Result<ComparisonReport> {
        let comparison = &self.config.comparison;
        let find = |name: &str| {
            groups.iter().find(|g| g.group.name == name).ok_or_else(|| {
                EvostatsError::Configuration(format!("unknown group '{}'", name))
            })
        };

        let baseline = find(&comparison.baseline)?;
        let treatment = find(&comparison.treatment)?;

        ComparisonReport::build(
            (&baseline.group, &baseline.matrix),
            (&treatment.group, &treatment.matrix),
            comparison.generation,
        )
    }

    fn export(&self, groups: &[GroupOutcome], comparison: &ComparisonReport) -> Result<Vec<PathBuf>> {
        let output = &self.config.output;
        let mut written = Vec::new();
        if !output.write_csv && !output.write_json {
            return Ok(written);
        }

        std::fs::create_dir_all(&output.directory)?;

        if output.write_csv {
            for outcome in groups {
                let path = output
                    .directory
                    .join(format!("{}_summary.csv", outcome.group.name));
                SummaryExporter::write_csv(&outcome.statistics, &path)?;
                written.push(path);
            }
        }

        if output.write_json {
            let path = output
                .directory
                .join(format!("comparison_gen{}.json", comparison.generation));
            comparison.write_json(&path)?;
            written.push(path);
        }

        Ok(written)
    }
}
