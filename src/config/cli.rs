use crate::core::{ConfigProvider, NumberRange, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "fizzbuzz")]
#[command(about = "Classify a range of integers as Fizz, Buzz or FizzBuzz")]
pub struct CliConfig {
    /// First number of the range
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub start: i64,

    /// Last number of the range (inclusive unless --half-open)
    #[arg(long, default_value_t = 10_000, allow_negative_numbers = true)]
    pub end: i64,

    /// Treat --end as exclusive
    #[arg(long)]
    pub half_open: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn range(&self) -> Result<NumberRange> {
        if self.half_open {
            NumberRange::half_open(self.start, self.end)
        } else {
            NumberRange::closed(self.start, self.end)
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.range()?;
        if let Some(path) = &self.output {
            validate_path("output", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_one_to_ten_thousand() {
        let config = CliConfig::try_parse_from(["fizzbuzz"]).unwrap();
        assert_eq!(config.range().unwrap(), NumberRange::one_based());
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(config.output_path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_half_open_zero_based() {
        let config =
            CliConfig::try_parse_from(["fizzbuzz", "--start", "0", "--half-open"]).unwrap();
        assert_eq!(config.range().unwrap(), NumberRange::zero_based());
    }

    #[test]
    fn test_negative_bounds_and_format() {
        let config = CliConfig::try_parse_from([
            "fizzbuzz", "--start", "-15", "--end", "-1", "--format", "csv",
        ])
        .unwrap();
        assert_eq!(config.range().unwrap().len(), 15);
        assert_eq!(config.output_format(), OutputFormat::Csv);
    }

    #[test]
    fn test_reversed_range_fails_validation() {
        let config =
            CliConfig::try_parse_from(["fizzbuzz", "--start", "20", "--end", "10"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected_by_parser() {
        assert!(CliConfig::try_parse_from(["fizzbuzz", "--format", "xml"]).is_err());
    }
}
