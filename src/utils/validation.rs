use crate::utils::error::{FizzBuzzError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range_bounds(field_name: &str, start: i64, end: i64) -> Result<()> {
    if start > end {
        return Err(FizzBuzzError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", start, end),
            reason: "start must not exceed end".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range_len(field_name: &str, len: u64, max_len: u64) -> Result<()> {
    if len > max_len {
        return Err(FizzBuzzError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: len.to_string(),
            reason: format!("Range may hold at most {} numbers", max_len),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(FizzBuzzError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FizzBuzzError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
