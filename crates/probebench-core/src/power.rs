//! Overflow-checked integer exponentiation.
//!
//! Two square-and-multiply variants that count every multiplication they
//! perform, so a benchmark can compare their work as well as their latency.
//! Any multiplication that would overflow the integer type ends the
//! computation with [`PowError::Overflow`]; the count still includes the
//! overflowing multiplication.

use num_traits::PrimInt;
use thiserror::Error;

/// Reasons an exponentiation produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PowError {
    /// A multiplication exceeded the range of the integer type.
    #[error("multiplication overflowed")]
    Overflow,

    /// Exponents must be non-negative.
    #[error("negative exponent: {0}")]
    NegativeExponent(i64),
}

/// Outcome of one exponentiation: the value (or why there is none) and the
/// number of multiplications performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowStats<T> {
    /// Computed power or the reason it could not be computed.
    pub result: Result<T, PowError>,
    /// Multiplications performed, including a final overflowing one.
    pub multiplications: u64,
}

impl<T: Copy> PowStats<T> {
    /// Returns the computed value, if any.
    pub fn value(&self) -> Option<T> {
        self.result.ok()
    }

    /// Returns true if the power was computed without overflow.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Computes `x^n` scanning exponent bits from least to most significant.
///
/// The running base is squared after each bit while bits remain, and
/// multiplied into the result when the current bit is set.
///
/// # Examples
///
/// ```
/// use probebench_core::pow_right_to_left;
///
/// let stats = pow_right_to_left(3i64, 5);
/// assert_eq!(stats.value(), Some(243));
/// assert_eq!(stats.multiplications, 4);
/// ```
pub fn pow_right_to_left<T: PrimInt>(x: T, n: i64) -> PowStats<T> {
    let mut multiplications = 0;
    let result = right_to_left(x, n, &mut multiplications);
    PowStats {
        result,
        multiplications,
    }
}

/// Computes `x^n` scanning exponent bits from most to least significant.
///
/// For every bit from the highest set one down, the result is squared and,
/// when the bit is set, multiplied by `x`.
///
/// # Examples
///
/// ```
/// use probebench_core::{pow_left_to_right, PowError};
///
/// let stats = pow_left_to_right(3i64, 5);
/// assert_eq!(stats.value(), Some(243));
/// assert_eq!(stats.multiplications, 5);
///
/// assert_eq!(pow_left_to_right(2i8, 7).result, Err(PowError::Overflow));
/// ```
pub fn pow_left_to_right<T: PrimInt>(x: T, n: i64) -> PowStats<T> {
    let mut multiplications = 0;
    let result = left_to_right(x, n, &mut multiplications);
    PowStats {
        result,
        multiplications,
    }
}

fn right_to_left<T: PrimInt>(x: T, n: i64, multiplications: &mut u64) -> Result<T, PowError> {
    if n < 0 {
        return Err(PowError::NegativeExponent(n));
    }
    let mut remaining = n.unsigned_abs();
    let mut base = x;
    let mut acc = T::one();

    while remaining > 0 {
        if remaining & 1 == 1 {
            acc = checked_mul(acc, base, multiplications)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            base = checked_mul(base, base, multiplications)?;
        }
    }
    Ok(acc)
}

fn left_to_right<T: PrimInt>(x: T, n: i64, multiplications: &mut u64) -> Result<T, PowError> {
    if n < 0 {
        return Err(PowError::NegativeExponent(n));
    }
    let exponent = n.unsigned_abs();
    if exponent == 0 {
        return Ok(T::one());
    }
    let top_bit = u64::BITS - 1 - exponent.leading_zeros();
    let mut acc = T::one();

    for bit in (0..=top_bit).rev() {
        acc = checked_mul(acc, acc, multiplications)?;
        if (exponent >> bit) & 1 == 1 {
            acc = checked_mul(acc, x, multiplications)?;
        }
    }
    Ok(acc)
}

#[inline]
fn checked_mul<T: PrimInt>(a: T, b: T, multiplications: &mut u64) -> Result<T, PowError> {
    *multiplications += 1;
    a.checked_mul(&b).ok_or(PowError::Overflow)
}
