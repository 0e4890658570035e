use crate::domain::model::{ClassifiedSequence, OutputFormat};
use crate::utils::error::{FizzBuzzError, Result};

pub fn render(sequence: &ClassifiedSequence, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Json => render_json(sequence),
        OutputFormat::Lines => Ok(render_lines(sequence)),
        OutputFormat::Csv => render_csv(sequence),
    }
}

fn render_json(sequence: &ClassifiedSequence) -> Result<Vec<u8>> {
    let mut data = serde_json::to_vec(&sequence.labels())?;
    data.push(b'\n');
    Ok(data)
}

fn render_lines(sequence: &ClassifiedSequence) -> Vec<u8> {
    let mut out = String::new();
    for entry in &sequence.entries {
        out.push_str(&entry.label);
        out.push('\n');
    }
    out.into_bytes()
}

fn render_csv(sequence: &ClassifiedSequence) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    if sequence.is_empty() {
        // serialize 只在第一筆資料時寫出標頭
        wtr.write_record(["number", "label"])?;
    }
    for entry in &sequence.entries {
        wtr.serialize(entry)?;
    }
    wtr.into_inner()
        .map_err(|e| FizzBuzzError::IoError(e.into_error()))
}
