use crate::utils::StrataError;

/// Computes `a * b / c` rounded down, widening through u128.
///
/// # Arguments
/// * `a`, `b` - factors
/// * `c` - divisor, must be nonzero
///
/// # Returns
/// * `Result<u64, StrataError>` - floored quotient, `MathOverflow` if the
///   true result does not fit in u64
pub fn mul_div_down(a: u64, b: u64, c: u64) -> Result<u64, StrataError> {
    if c == 0 {
        return Err(StrataError::DivisionByZero);
    }
    // u64 * u64 always fits in u128
    let wide = (a as u128) * (b as u128) / (c as u128);
    u64::try_from(wide).map_err(|_| StrataError::MathOverflow)
}

/// Computes `a * b / c` rounded up, widening through u128.
pub fn mul_div_up(a: u64, b: u64, c: u64) -> Result<u64, StrataError> {
    if c == 0 {
        return Err(StrataError::DivisionByZero);
    }
    let wide = ((a as u128) * (b as u128)).div_ceil(c as u128);
    u64::try_from(wide).map_err(|_| StrataError::MathOverflow)
}
