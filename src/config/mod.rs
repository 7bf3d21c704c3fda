pub mod traits;
pub mod groups;
pub mod loader;
pub mod comparison;
pub mod output;
pub mod manager;

pub use manager::{ConfigManager, AnalysisConfig};
pub use groups::GroupConfig;
pub use loader::LoaderConfig;
pub use comparison::ComparisonConfig;
pub use output::OutputConfig;
pub use traits::ConfigSection;
