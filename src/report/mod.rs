pub mod comparison;
pub mod export;

pub use comparison::{ComparisonReport, GroupSnapshot};
pub use export::SummaryExporter;
