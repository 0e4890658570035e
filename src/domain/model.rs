use crate::utils::error::{FizzBuzzError, Result};
use crate::utils::validation::{validate_range_bounds, validate_range_len};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// 單一範圍可容納的最大數量
pub const MAX_RANGE_LEN: u64 = 10_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    FizzBuzz,
    Fizz,
    Buzz,
    Number(i64),
}

impl Classification {
    pub fn of(n: i64) -> Self {
        if n % 15 == 0 {
            Classification::FizzBuzz
        } else if n % 3 == 0 {
            Classification::Fizz
        } else if n % 5 == 0 {
            Classification::Buzz
        } else {
            Classification::Number(n)
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::FizzBuzz => f.write_str("FizzBuzz"),
            Classification::Fizz => f.write_str("Fizz"),
            Classification::Buzz => f.write_str("Buzz"),
            Classification::Number(n) => write!(f, "{}", n),
        }
    }
}

/// 待分類的整數範圍，內部一律存為半開區間 `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberRange {
    start: i64,
    end: i64,
}

impl NumberRange {
    /// 閉區間 `start..=end`
    pub fn closed(start: i64, end: i64) -> Result<Self> {
        validate_range_bounds("range", start, end)?;
        let end = end
            .checked_add(1)
            .ok_or_else(|| FizzBuzzError::InvalidConfigValueError {
                field: "range.end".to_string(),
                value: end.to_string(),
                reason: "Inclusive end overflows i64".to_string(),
            })?;
        Self::checked(start, end)
    }

    /// 半開區間 `start..end`
    pub fn half_open(start: i64, end: i64) -> Result<Self> {
        validate_range_bounds("range", start, end)?;
        Self::checked(start, end)
    }

    fn checked(start: i64, end: i64) -> Result<Self> {
        let len = (end as i128 - start as i128) as u64;
        validate_range_len("range", len, MAX_RANGE_LEN)?;
        Ok(Self { start, end })
    }

    /// 預設範圍 `1..=10000`
    pub fn one_based() -> Self {
        Self { start: 1, end: 10_001 }
    }

    /// 從零開始的範圍 `0..10000`
    pub fn zero_based() -> Self {
        Self { start: 0, end: 10_000 }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    /// 不包含的上界
    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn iter(&self) -> Range<i64> {
        self.start..self.end
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self::one_based()
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedEntry {
    pub number: i64,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedSequence {
    pub entries: Vec<ClassifiedEntry>,
}

impl ClassifiedSequence {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of labels on a single line
    #[default]
    Json,
    /// One label per line
    Lines,
    /// `number,label` rows with a header
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub count: usize,
    pub destination: String,
}
