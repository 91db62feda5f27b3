//! Data models: extracted advice fields and pipeline configuration.

pub mod advice;
pub mod config;

pub use advice::AdviceFields;
pub use config::PadvConfig;
