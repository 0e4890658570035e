use crate::core::classifier::classify_all;
use crate::core::render::render;
use crate::core::{ClassifiedSequence, ConfigProvider, Pipeline, Sink};
use crate::utils::error::Result;

pub struct RangePipeline<S: Sink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: Sink, C: ConfigProvider> RangePipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// 乾跑：只描述將處理的範圍與輸出，不做分類
pub fn dry_run_report<C: ConfigProvider>(config: &C) -> Result<String> {
    let range = config.range()?;
    Ok(format!(
        "Dry run: would classify {} numbers ({}) as {:?} into {}",
        range.len(),
        range,
        config.output_format(),
        config.output_path().unwrap_or("stdout")
    ))
}

impl<S: Sink, C: ConfigProvider> Pipeline for RangePipeline<S, C> {
    fn extract(&self) -> Result<Vec<i64>> {
        let range = self.config.range()?;
        tracing::debug!("Generating numbers for range {}", range);
        Ok(range.iter().collect())
    }

    fn transform(&self, numbers: Vec<i64>) -> Result<ClassifiedSequence> {
        Ok(classify_all(numbers))
    }

    fn load(&self, sequence: ClassifiedSequence) -> Result<String> {
        let format = self.config.output_format();
        tracing::debug!("Rendering {} entries as {:?}", sequence.len(), format);

        let data = render(&sequence, format)?;
        self.sink.write_output(&data)?;

        Ok(self.sink.describe())
    }
}
