pub mod analysis;
pub mod config;
pub mod error;
pub mod geometry;
pub mod pose;
pub mod report;
pub mod skeleton;

pub use error::AnalysisError;
