//! Numbers typed into forms.
//!
//! The `coerce_*` functions never fail: blank, malformed, or non-finite
//! input becomes zero. The `parse_*` functions are the strict counterparts
//! for callers that want to reject bad input instead.

use crate::{Error, Result};

/// Parse a decimal amount (salary, budget, unit price).
pub fn parse_f64(input: &str) -> Result<f64> {
  let trimmed = input.trim();
  match trimmed.parse::<f64>() {
    Ok(value) if value.is_finite() => Ok(value),
    _ => Err(Error::InvalidNumber(input.to_owned())),
  }
}

/// Parse a whole number (stock, progress). A decimal is truncated toward
/// zero.
pub fn parse_i64(input: &str) -> Result<i64> {
  let trimmed = input.trim();
  if let Ok(value) = trimmed.parse::<i64>() {
    return Ok(value);
  }
  let value = parse_f64(trimmed).map_err(|_| Error::InvalidNumber(input.to_owned()))?;
  if value < i64::MIN as f64 || value > i64::MAX as f64 {
    return Err(Error::InvalidNumber(input.to_owned()));
  }
  Ok(value.trunc() as i64)
}

pub fn coerce_f64(input: &str) -> f64 { parse_f64(input).unwrap_or(0.0) }

pub fn coerce_i64(input: &str) -> i64 { parse_i64(input).unwrap_or(0) }

/// Small whole numbers such as a supplier rating; out-of-range values
/// become zero too.
pub fn coerce_u8(input: &str) -> u8 {
  parse_i64(input)
    .ok()
    .and_then(|value| u8::try_from(value).ok())
    .unwrap_or(0)
}
