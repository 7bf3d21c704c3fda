mod bestfit;
mod types;
mod validator;

pub use bestfit::BestfitConnector;
pub use types::{RunFile, ShapePolicy};
pub use validator::ShapeValidator;
