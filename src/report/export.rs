use crate::data::ExperimentGroupMatrix;
use crate::error::Result;
use crate::stats::ColumnStatistics;
use polars::prelude::*;
use std::io::Write;
use std::path::Path;

/// Tabular exports of aggregated sequences for external plotting.
pub struct SummaryExporter;

impl SummaryExporter {
    /// Columns: generation, median, p25, p75.
    pub fn to_frame(stats: &ColumnStatistics) -> Result<DataFrame> {
        let generations: Vec<u64> = (0..stats.generations() as u64).collect();

        let df = df!(
            "generation" => generations,
            "median" => stats.median.values.clone(),
            "p25" => stats.p25.values.clone(),
            "p75" => stats.p75.values.clone(),
        )?;

        Ok(df)
    }

    /// Raw runs matrix: one row per run, a `run` column with its source path
    /// followed by one `gen_<g>` column per generation.
    pub fn matrix_frame(matrix: &ExperimentGroupMatrix) -> Result<DataFrame> {
        let runs: Vec<String> = matrix
            .sources()
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect();

        let mut columns = Vec::with_capacity(matrix.generations() + 1);
        columns.push(Column::new("run".into(), runs));
        for g in 0..matrix.generations() {
            columns.push(Column::new(format!("gen_{}", g).into(), matrix.column_values(g)?));
        }

        Ok(DataFrame::new(columns)?)
    }

    pub fn write_csv<P: AsRef<Path>>(stats: &ColumnStatistics, path: P) -> Result<()> {
        let mut df = Self::to_frame(stats)?;
        Self::write_frame(&mut df, path)
    }

    pub fn write_frame<P: AsRef<Path>>(df: &mut DataFrame, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        Self::write_to(df, file)?;

        log::info!("Wrote {} rows to {}", df.height(), path.as_ref().display());
        Ok(())
    }

    /// Every row as CSV, header first. Unlike the `Display` table this never elides rows.
    pub fn write_to<W: Write>(df: &mut DataFrame, writer: W) -> Result<()> {
        CsvWriter::new(writer).include_header(true).finish(df)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ColumnAggregator;
    use tempfile::TempDir;

    fn sample_matrix() -> ExperimentGroupMatrix {
        ExperimentGroupMatrix::from_rows(vec![
            vec![-10.0, -5.0, 0.0],
            vec![-12.0, -4.0, 1.0],
            vec![-8.0, -6.0, 2.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_summary_frame() {
        let stats = ColumnAggregator::column_statistics(&sample_matrix()).unwrap();
        let df = SummaryExporter::to_frame(&stats).unwrap();
        assert_eq!(df.shape(), (3, 4));

        let median = df.column("median").unwrap().f64().unwrap();
        assert_eq!(median.get(0), Some(-10.0));
        assert_eq!(median.get(2), Some(1.0));
    }

    #[test]
    fn test_matrix_frame() {
        let df = SummaryExporter::matrix_frame(&sample_matrix()).unwrap();
        assert_eq!(df.shape(), (3, 4));
        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["run", "gen_0", "gen_1", "gen_2"]);
    }

    #[test]
    fn test_write_to_keeps_every_generation() {
        let rows: Vec<Vec<f64>> = (0..3)
            .map(|r| (0..500).map(|g| (r * 1000 + g) as f64).collect())
            .collect();
        let matrix = ExperimentGroupMatrix::from_rows(rows).unwrap();
        let stats = ColumnAggregator::column_statistics(&matrix).unwrap();
        let mut df = SummaryExporter::to_frame(&stats).unwrap();

        let mut buffer = Vec::new();
        SummaryExporter::write_to(&mut df, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text.lines().count(), 501);
        assert!(!text.contains('…'));
        assert!(text.lines().last().unwrap().starts_with("499,"));
    }

    #[test]
    fn test_write_csv() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("summary.csv");
        let stats = ColumnAggregator::column_statistics(&sample_matrix()).unwrap();
        SummaryExporter::write_csv(&stats, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("generation,median,p25,p75"));
        assert_eq!(lines.count(), 3);
    }
}
