pub mod classifier;
pub mod engine;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{
    ClassifiedEntry, ClassifiedSequence, Classification, NumberRange, OutputFormat, RunSummary,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink};
pub use crate::utils::error::Result;
