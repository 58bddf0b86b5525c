//! Explicit parse-and-validate step for frontend dimension input.

use crate::core::DimensionInput;
use crate::utils::ValidationError;

/// Parses a width or height into a positive pixel count.
///
/// Accepts JSON numbers and numeric strings (surrounding whitespace ignored).
/// Anything non-numeric, zero, negative, fractional or wider than `u32` is rejected.
pub fn parse_dimension(field: &'static str, input: &DimensionInput) -> Result<u32, ValidationError> {
    match input {
        DimensionInput::Number(value) => check_pixels(field, *value, value.to_string()),
        DimensionInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(ValidationError::EmptyDimension { field });
            }

            let value = trimmed.parse::<f64>().map_err(|_| ValidationError::NotANumber {
                field,
                value: text.clone(),
            })?;
            check_pixels(field, value, trimmed.to_string())
        }
    }
}

fn check_pixels(field: &'static str, value: f64, raw: String) -> Result<u32, ValidationError> {
    if value.is_nan() {
        return Err(ValidationError::NotANumber { field, value: raw });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value: raw });
    }
    if value > f64::from(u32::MAX) {
        return Err(ValidationError::OutOfRange { field, value: raw });
    }
    if value.fract() != 0.0 {
        return Err(ValidationError::NotAnInteger { field, value: raw });
    }

    Ok(value as u32)
}
