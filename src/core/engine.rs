use crate::core::{Pipeline, RunSummary};
use crate::utils::error::{FizzBuzzError, Result};

pub struct FizzBuzzEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FizzBuzzEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting FizzBuzz run...");

        // Extract
        let numbers = self.pipeline.extract()?;
        let expected = numbers.len();
        tracing::info!("Extracted {} numbers", expected);

        // Transform
        let sequence = self.pipeline.transform(numbers)?;
        if sequence.len() != expected {
            return Err(FizzBuzzError::ProcessingError {
                message: format!(
                    "Classified {} entries for {} numbers",
                    sequence.len(),
                    expected
                ),
            });
        }
        tracing::info!("Classified {} numbers", sequence.len());

        // Load
        let destination = self.pipeline.load(sequence)?;
        tracing::info!("Output written to: {}", destination);

        Ok(RunSummary {
            count: expected,
            destination,
        })
    }
}
