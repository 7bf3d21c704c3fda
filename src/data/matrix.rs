use super::connectors::RunFile;
use crate::error::{EvostatsError, Result};
use ndarray::{Array2, ArrayView1};
use std::path::{Path, PathBuf};

/// Runs × generations table for one experiment group.
///
/// Row `i` is the value sequence of `sources()[i]`. Every row has the same
/// number of generations.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentGroupMatrix {
    data: Array2<f64>,
    sources: Vec<PathBuf>,
}

impl ExperimentGroupMatrix {
    /// Stack runs into a matrix, keeping the first `generations` values of each.
    pub(crate) fn from_runs(runs: Vec<RunFile>, generations: usize) -> Result<Self> {
        let mut data = Array2::zeros((runs.len(), generations));
        let mut sources = Vec::with_capacity(runs.len());

        for (i, run) in runs.into_iter().enumerate() {
            let values =
                run.values
                    .get(..generations)
                    .ok_or_else(|| EvostatsError::ShapeMismatch {
                        path: run.path.clone(),
                        expected: generations,
                        actual: run.values.len(),
                    })?;
            data.row_mut(i).assign(&ArrayView1::from(values));
            sources.push(run.path);
        }

        Ok(Self { data, sources })
    }

    /// Build a matrix from in-memory rows. All rows must have the same length
    /// and there must be at least one row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let generations = rows.first().map(Vec::len).ok_or_else(|| {
            EvostatsError::InsufficientData("a matrix needs at least one run".to_string())
        })?;
        let runs = rows
            .into_iter()
            .enumerate()
            .map(|(i, values)| {
                let run = RunFile {
                    path: PathBuf::from(format!("row {}", i)),
                    columns: 1,
                    values,
                };
                if run.generations() != generations {
                    return Err(EvostatsError::ShapeMismatch {
                        path: run.path,
                        expected: generations,
                        actual: run.values.len(),
                    });
                }
                Ok(run)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_runs(runs, generations)
    }

    pub fn runs(&self) -> usize {
        self.data.nrows()
    }

    pub fn generations(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn source(&self, run: usize) -> Option<&Path> {
        self.sources.get(run).map(PathBuf::as_path)
    }

    /// Values of every run at generation `generation`.
    pub fn column(&self, generation: usize) -> Result<ArrayView1<'_, f64>> {
        self.check_generation(generation)?;
        Ok(self.data.column(generation))
    }

    pub fn column_values(&self, generation: usize) -> Result<Vec<f64>> {
        Ok(self.column(generation)?.to_vec())
    }

    /// Value sequence of a single run.
    pub fn row(&self, run: usize) -> Result<ArrayView1<'_, f64>> {
        if run >= self.runs() {
            return Err(EvostatsError::IndexOutOfRange {
                index: run,
                len: self.runs(),
            });
        }
        Ok(self.data.row(run))
    }

    fn check_generation(&self, generation: usize) -> Result<()> {
        if generation >= self.generations() {
            return Err(EvostatsError::IndexOutOfRange {
                index: generation,
                len: self.generations(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_shape() {
        let m = ExperimentGroupMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
            .unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.column_values(1).unwrap(), vec![2.0, 5.0]);
        assert_eq!(m.row(1).unwrap().to_vec(), vec![4.0, 5.0, 6.0]);
        assert_eq!(m.source(0), Some(Path::new("row 0")));
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = ExperimentGroupMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(
            result,
            Err(EvostatsError::ShapeMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_from_rows_without_runs() {
        assert!(matches!(
            ExperimentGroupMatrix::from_rows(Vec::new()),
            Err(EvostatsError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_from_runs_without_runs() {
        let m = ExperimentGroupMatrix::from_runs(Vec::new(), 3).unwrap();
        assert_eq!(m.shape(), (0, 3));
        assert!(m.is_empty());
    }

    #[test]
    fn test_column_out_of_range() {
        let m = ExperimentGroupMatrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        match m.column(2) {
            Err(EvostatsError::IndexOutOfRange { index, len }) => {
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("expected out of range, got {:?}", other),
        }
        assert!(m.row(1).is_err());
    }

    #[test]
    fn test_from_runs_truncates() {
        let runs = vec![
            RunFile {
                path: PathBuf::from("a"),
                columns: 2,
                values: vec![1.0, 2.0, 3.0],
            },
            RunFile {
                path: PathBuf::from("b"),
                columns: 2,
                values: vec![4.0, 5.0],
            },
        ];
        let m = ExperimentGroupMatrix::from_runs(runs, 2).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.row(0).unwrap().to_vec(), vec![1.0, 2.0]);
    }
}
