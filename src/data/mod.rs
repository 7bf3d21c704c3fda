pub mod connectors;
pub mod loader;
pub mod matrix;

pub use connectors::{BestfitConnector, RunFile, ShapePolicy, ShapeValidator};
pub use loader::DatasetLoader;
pub use matrix::ExperimentGroupMatrix;
