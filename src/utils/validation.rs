use crate::utils::error::{LunchError, Result};
use chrono::NaiveDate;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// `field` names the value in the error message so callers can tell which
/// input was rejected. A string that is not three `-`separated numeric parts
/// is an invalid *format*; three numbers that do not make a real date are an
/// invalid *value*.
pub fn validate_date(value: &str, field: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = value.split('-').collect();

    let numeric = parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));

    if !numeric {
        return Err(LunchError::validation(format!(
            "Value provided for {} is an invalid format. YYYY-MM-DD required.",
            field
        )));
    }

    let invalid_value = || {
        LunchError::validation(format!(
            "Value provided for {} is an invalid value. Valid date in the format of YYYY-MM-DD required.",
            field
        ))
    };

    let year: i32 = parts[0].parse().map_err(|_| invalid_value())?;
    let month: u32 = parts[1].parse().map_err(|_| invalid_value())?;
    let day: u32 = parts[2].parse().map_err(|_| invalid_value())?;

    if !(1..=32767).contains(&year) {
        return Err(invalid_value());
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid_value)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LunchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LunchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(LunchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_file_extensions(
    field_name: &str,
    files: &[&str],
    allowed_extensions: &[&str],
) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        match std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(extension) if allowed_set.contains(extension) => {}
            Some(extension) => {
                return Err(LunchError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.to_string(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            None => {
                return Err(LunchError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.to_string(),
                    reason: "File has no extension or invalid filename".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LunchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
