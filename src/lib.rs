pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use error::{EvostatsError, Result};
