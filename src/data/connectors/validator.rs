use super::types::{RunFile, ShapePolicy};
use crate::error::{EvostatsError, Result};

pub struct ShapeValidator;

impl ShapeValidator {
    /// Establish the generation count shared by every run.
    ///
    /// The first run is authoritative under `Strict`; under `TruncateToShortest`
    /// the shortest run wins and every longer run is reported.
    pub fn common_generations(runs: &[RunFile], policy: ShapePolicy) -> Result<usize> {
        let first = runs
            .first()
            .ok_or_else(|| EvostatsError::InsufficientData("no runs to validate".to_string()))?;

        match policy {
            ShapePolicy::Strict => {
                let expected = first.generations();
                for run in runs {
                    Self::check_rows(run, expected)?;
                }
                Ok(expected)
            }
            ShapePolicy::TruncateToShortest => {
                let shortest = runs.iter().map(RunFile::generations).min().unwrap_or(0);
                for run in runs.iter().filter(|r| r.generations() > shortest) {
                    log::warn!(
                        "Truncating {} from {} to {} generations",
                        run.path.display(),
                        run.generations(),
                        shortest
                    );
                }
                Ok(shortest)
            }
        }
    }

    pub fn check_rows(run: &RunFile, expected: usize) -> Result<()> {
        if run.generations() != expected {
            return Err(EvostatsError::ShapeMismatch {
                path: run.path.clone(),
                expected,
                actual: run.generations(),
            });
        }
        Ok(())
    }

    /// Check that a run has at least one generation.
    pub fn check_not_empty(run: &RunFile) -> Result<()> {
        if run.generations() == 0 {
            return Err(EvostatsError::Parse {
                path: run.path.clone(),
                line: 0,
                message: "file holds no data rows".to_string(),
            });
        }
        Ok(())
    }
}
