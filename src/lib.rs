pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::sink::{FileSink, OutputSink, StdoutSink};
pub use config::toml_config::TomlConfig;
pub use crate::core::{classifier::classify, engine::FizzBuzzEngine, pipeline::RangePipeline};
pub use utils::error::{FizzBuzzError, Result};
