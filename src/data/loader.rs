use super::connectors::{BestfitConnector, RunFile, ShapeValidator};
use super::matrix::ExperimentGroupMatrix;
use crate::config::LoaderConfig;
use crate::error::{EvostatsError, Result};
use std::path::{Path, PathBuf};

/// Discovers the runs of one experiment group and stacks them into a matrix.
#[derive(Debug, Clone, Default)]
pub struct DatasetLoader {
    config: LoaderConfig,
}

impl DatasetLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// List the run files under `group_dir`, sorted lexicographically.
    pub fn discover<P: AsRef<Path>>(&self, group_dir: P) -> Result<Vec<PathBuf>> {
        let group_dir = group_dir.as_ref();
        let escaped = glob::Pattern::escape(utf8(group_dir)?);
        let pattern = Path::new(&escaped).join(&self.config.pattern);

        let mut paths = Vec::new();
        for entry in glob::glob(utf8(&pattern)?)? {
            let path = entry.map_err(glob::GlobError::into_error)?;
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(EvostatsError::NotFound(format!(
                "no file matches '{}' under {}",
                self.config.pattern,
                group_dir.display()
            )));
        }

        Ok(paths)
    }

    /// Load every run of a group. Fails as a whole if any run is unreadable
    /// or disagrees with the shape policy.
    pub fn load<P: AsRef<Path>>(&self, group_dir: P) -> Result<ExperimentGroupMatrix> {
        let paths = self.discover(&group_dir)?;

        let runs = paths
            .iter()
            .map(|path| {
                let run = BestfitConnector::parse(path, self.config.value_column)?;
                ShapeValidator::check_not_empty(&run)?;
                Ok(run)
            })
            .collect::<Result<Vec<RunFile>>>()?;

        let generations = ShapeValidator::common_generations(&runs, self.config.shape_policy)?;
        let matrix = ExperimentGroupMatrix::from_runs(runs, generations)?;

        log::info!(
            "Loaded {} runs x {} generations from {}",
            matrix.runs(),
            matrix.generations(),
            group_dir.as_ref().display()
        );

        Ok(matrix)
    }
}

/// Glob matches on strings; a lossy conversion would silently match nothing.
fn utf8(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        EvostatsError::Configuration(format!("{} is not valid UTF-8", path.display()))
    })
}
