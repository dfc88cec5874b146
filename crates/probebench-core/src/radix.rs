//! Integer to radix-string conversion.

use thiserror::Error;

/// Digit alphabet for bases up to 36.
pub const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base.
pub const MAX_BASE: u32 = 36;

/// Invalid input to [`to_base`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RadixError {
    #[error("base must be in [2, 36], got {0}")]
    InvalidBase(u32),

    #[error("value must be non-negative, got {0}")]
    NegativeValue(i64),
}

/// Renders a non-negative integer in the given base using digits `0-9A-Z`.
///
/// Produces one digit per division, so the work is `O(log_base(value))`.
///
/// # Examples
///
/// ```
/// use probebench_core::{to_base, RadixError};
///
/// assert_eq!(to_base(255, 16).unwrap(), "FF");
/// assert_eq!(to_base(10, 2).unwrap(), "1010");
/// assert_eq!(to_base(0, 7).unwrap(), "0");
/// assert_eq!(to_base(5, 37), Err(RadixError::InvalidBase(37)));
/// ```
pub fn to_base(value: i64, base: u32) -> Result<String, RadixError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RadixError::InvalidBase(base));
    }
    if value < 0 {
        return Err(RadixError::NegativeValue(value));
    }
    if value == 0 {
        return Ok("0".to_string());
    }

    let base = u64::from(base);
    let mut remaining = value.unsigned_abs();
    let mut digits = Vec::new();
    while remaining > 0 {
        digits.push(DIGITS[(remaining % base) as usize]);
        remaining /= base;
    }
    Ok(digits.iter().rev().map(|&digit| char::from(digit)).collect())
}

/// Number of digits [`to_base`] produces for `value` in `base`.
///
/// Returns `None` for the same inputs `to_base` rejects.
pub fn digit_count(value: i64, base: u32) -> Option<u32> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) || value < 0 {
        return None;
    }
    let mut remaining = value.unsigned_abs() / u64::from(base);
    let mut count = 1;
    while remaining > 0 {
        remaining /= u64::from(base);
        count += 1;
    }
    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_with_std() {
        for base in MIN_BASE..=MAX_BASE {
            for value in [1, 2, 35, 36, 1_000, 65_535, 123_456_789, i64::MAX] {
                let text = to_base(value, base).unwrap();
                assert_eq!(i64::from_str_radix(&text, base).unwrap(), value);
                assert_eq!(digit_count(value, base), Some(text.len() as u32));
            }
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(to_base(10, 1), Err(RadixError::InvalidBase(1)));
        assert_eq!(to_base(10, 0), Err(RadixError::InvalidBase(0)));
        assert_eq!(to_base(-4, 10), Err(RadixError::NegativeValue(-4)));
        // Base is checked first.
        assert_eq!(to_base(-4, 99), Err(RadixError::InvalidBase(99)));
        assert_eq!(digit_count(-1, 10), None);
    }

    #[test]
    fn test_zero() {
        for base in MIN_BASE..=MAX_BASE {
            assert_eq!(to_base(0, base).unwrap(), "0");
            assert_eq!(digit_count(0, base), Some(1));
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RadixError::InvalidBase(40).to_string(),
            "base must be in [2, 36], got 40"
        );
        assert_eq!(
            RadixError::NegativeValue(-3).to_string(),
            "value must be non-negative, got -3"
        );
    }
}
