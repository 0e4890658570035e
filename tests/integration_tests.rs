#![cfg(feature = "cli")]

use anyhow::Result;
use fizzbuzz::core::ConfigProvider;
use fizzbuzz::{CliConfig, FileSink, FizzBuzzEngine, OutputSink, RangePipeline, TomlConfig};
use tempfile::TempDir;

fn cli_config(args: &[&str]) -> CliConfig {
    use clap::Parser;
    let mut argv = vec!["fizzbuzz"];
    argv.extend_from_slice(args);
    CliConfig::try_parse_from(argv).unwrap()
}

#[test]
fn test_default_run_writes_one_to_ten_thousand_as_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("fizzbuzz.json");

    let config = cli_config(&[]);
    let pipeline = RangePipeline::new(FileSink::new(&output_path), config);
    let summary = FizzBuzzEngine::new(pipeline).run()?;

    assert_eq!(summary.count, 10_000);
    assert_eq!(summary.destination, output_path.display().to_string());

    let content = std::fs::read_to_string(&output_path)?;
    assert_eq!(content.lines().count(), 1);

    let labels: Vec<String> = serde_json::from_str(content.trim_end())?;
    assert_eq!(labels.len(), 10_000);
    assert_eq!(labels[0], "1");
    assert_eq!(labels[2], "Fizz");
    assert_eq!(labels[4], "Buzz");
    assert_eq!(labels[14], "FizzBuzz");
    assert_eq!(labels[9_999], "Buzz");

    Ok(())
}

#[test]
fn test_zero_based_half_open_starts_with_fizzbuzz() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("zero.txt");

    let config = cli_config(&["--start", "0", "--half-open", "--format", "lines"]);
    let pipeline = RangePipeline::new(FileSink::new(&output_path), config);
    let summary = FizzBuzzEngine::new(pipeline).run()?;

    assert_eq!(summary.count, 10_000);

    let content = std::fs::read_to_string(&output_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 10_000);
    assert_eq!(lines[0], "FizzBuzz");
    assert_eq!(lines[7], "7");
    assert_eq!(lines[9_999], "Fizz");

    Ok(())
}

#[test]
fn test_every_label_matches_divisibility_rules() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("rows.csv");

    let config = cli_config(&["--start", "-45", "--end", "45", "--format", "csv"]);
    let pipeline = RangePipeline::new(FileSink::new(&output_path), config);
    FizzBuzzEngine::new(pipeline).run()?;

    let mut reader = csv::Reader::from_path(&output_path)?;
    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        let n: i64 = record[0].parse()?;
        let expected = match (n % 3 == 0, n % 5 == 0) {
            (true, true) => "FizzBuzz".to_string(),
            (true, false) => "Fizz".to_string(),
            (false, true) => "Buzz".to_string(),
            (false, false) => n.to_string(),
        };
        assert_eq!(&record[1], expected, "n = {}", n);
        rows += 1;
    }
    assert_eq!(rows, 91);

    Ok(())
}

#[test]
fn test_toml_config_drives_output_sink() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("out").join("fizzbuzz.txt");
    let config_path = temp_dir.path().join("fizzbuzz.toml");

    std::fs::write(
        &config_path,
        format!(
            "[range]\nstart = 10\nend = 15\n\n[output]\nformat = \"lines\"\npath = {:?}\n",
            output_path.display().to_string()
        ),
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    let sink = OutputSink::from_path(config.output_path());
    let summary = FizzBuzzEngine::new(RangePipeline::new(sink, config)).run()?;

    assert_eq!(summary.count, 6);
    assert_eq!(
        std::fs::read_to_string(&output_path)?,
        "Buzz\n11\nFizz\n13\n14\nFizzBuzz\n"
    );

    Ok(())
}

#[test]
fn test_empty_range_writes_empty_sequence() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("empty.json");

    let config = cli_config(&["--start", "5", "--end", "5", "--half-open"]);
    let pipeline = RangePipeline::new(FileSink::new(&output_path), config);
    let summary = FizzBuzzEngine::new(pipeline).run()?;

    assert_eq!(summary.count, 0);
    assert_eq!(std::fs::read_to_string(&output_path)?, "[]\n");

    Ok(())
}

#[test]
fn test_invalid_range_fails_before_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("never.json");

    let config = cli_config(&["--start", "10", "--end", "1"]);
    let pipeline = RangePipeline::new(FileSink::new(&output_path), config);
    let err = FizzBuzzEngine::new(pipeline).run().unwrap_err();

    assert_eq!(err.exit_code(), 1);
    assert!(!output_path.exists());

    Ok(())
}
