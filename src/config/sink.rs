use crate::core::Sink;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_output(&self, data: &[u8]) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(data)?;
        stdout.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Sink for FileSink {
    fn write_output(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, data)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// 依設定選擇輸出目的地
pub enum OutputSink {
    Stdout(StdoutSink),
    File(FileSink),
}

impl OutputSink {
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            Some(path) => OutputSink::File(FileSink::new(path)),
            None => OutputSink::Stdout(StdoutSink),
        }
    }
}

impl Sink for OutputSink {
    fn write_output(&self, data: &[u8]) -> Result<()> {
        match self {
            OutputSink::Stdout(sink) => sink.write_output(data),
            OutputSink::File(sink) => sink.write_output(data),
        }
    }

    fn describe(&self) -> String {
        match self {
            OutputSink::Stdout(sink) => sink.describe(),
            OutputSink::File(sink) => sink.describe(),
        }
    }
}
