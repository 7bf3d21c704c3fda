use super::types::RunFile;
use crate::error::{EvostatsError, Result};
use std::path::Path;

pub struct BestfitConnector;

impl BestfitConnector {
    /// Parse a whitespace-delimited table and keep `value_column` of every row.
    ///
    /// Blank lines and `#` comments are skipped. Every data row must carry the
    /// same number of columns as the first one.
    pub fn parse<P: AsRef<Path>>(path: P, value_column: usize) -> Result<RunFile> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let run = Self::parse_str(path, &contents, value_column)?;

        log::debug!(
            "Parsed {} ({} generations, {} columns)",
            path.display(),
            run.generations(),
            run.columns
        );

        Ok(run)
    }

    pub fn parse_str(path: &Path, contents: &str, value_column: usize) -> Result<RunFile> {
        let mut columns: Option<usize> = None;
        let mut values = Vec::new();

        for (idx, line) in contents.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let row = trimmed
                .split_whitespace()
                .map(|token| Self::parse_value(path, line_no, token))
                .collect::<Result<Vec<f64>>>()?;

            let expected = *columns.get_or_insert(row.len());
            if row.len() != expected {
                return Err(Self::error(
                    path,
                    line_no,
                    format!("expected {} columns, found {}", expected, row.len()),
                ));
            }

            match row.get(value_column) {
                Some(&value) => values.push(value),
                None => {
                    return Err(Self::error(
                        path,
                        line_no,
                        format!(
                            "missing value column {} (row has {} columns)",
                            value_column,
                            row.len()
                        ),
                    ));
                }
            }
        }

        Ok(RunFile {
            path: path.to_path_buf(),
            columns: columns.unwrap_or(0),
            values,
        })
    }

    fn parse_value(path: &Path, line: usize, token: &str) -> Result<f64> {
        let value: f64 = token
            .parse()
            .map_err(|_| Self::error(path, line, format!("'{}' is not a number", token)))?;

        if !value.is_finite() {
            return Err(Self::error(path, line, format!("non-finite value '{}'", token)));
        }

        Ok(value)
    }

    fn error(path: &Path, line: usize, message: String) -> EvostatsError {
        EvostatsError::Parse {
            path: path.to_path_buf(),
            line,
            message,
        }
    }
}
