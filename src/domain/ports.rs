use crate::domain::model::{ClassifiedSequence, NumberRange, OutputFormat};
use crate::utils::error::Result;

pub trait Sink {
    /// 一次寫出完整的渲染結果
    fn write_output(&self, data: &[u8]) -> Result<()>;
    fn describe(&self) -> String;
}

pub trait ConfigProvider {
    fn range(&self) -> Result<NumberRange>;
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<i64>>;
    fn transform(&self, numbers: Vec<i64>) -> Result<ClassifiedSequence>;
    fn load(&self, sequence: ClassifiedSequence) -> Result<String>;
}
