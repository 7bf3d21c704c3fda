pub mod aggregator;
pub mod boxplot;
pub mod mann_whitney;
pub mod quantile;
pub mod significance;

pub use aggregator::{ColumnAggregator, ColumnStatistics, Statistic, SummarySequence};
pub use boxplot::BoxSummary;
pub use mann_whitney::MannWhitney;
pub use significance::{SignificanceBucket, SignificanceResult};
