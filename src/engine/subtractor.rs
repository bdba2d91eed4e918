// ============================================================================
// Subtractor
// Digit-by-digit subtraction with borrow propagation
// ============================================================================

use crate::domain::Operation;
use crate::interfaces::ArithmeticOperation;
use crate::numeric::{
    compare_digits, normalize_buf, strip_leading_zeros, ArithmeticError, DigitBuf, Number,
    NumericResult, Radix,
};
use std::cmp::Ordering;

/// Schoolbook subtraction, defined only when `lhs >= rhs`
#[derive(Debug, Clone, Copy, Default)]
pub struct Subtractor;

impl ArithmeticOperation for Subtractor {
    fn apply(&self, radix: Radix, lhs: &Number, rhs: &Number) -> NumericResult<Number> {
        lhs.checked_sub(rhs, radix)
    }

    fn operation(&self) -> Operation {
        Operation::Sub
    }
}

/// Subtract `rhs` from `lhs` in `base`.
///
/// There is no negative representation, so `lhs < rhs` is reported as
/// `NegativeResult` rather than as any digit string.
///
/// ```
/// use arithmatoy::numeric::ArithmeticError;
///
/// assert_eq!(arithmatoy::sub(10, "1000", "999").unwrap(), "1");
/// assert_eq!(arithmatoy::sub(10, "5", "9"), Err(ArithmeticError::NegativeResult));
/// ```
///
/// # Errors
/// - `InvalidBase` if `base` is outside [2, 36]
/// - `EmptyOperand` / `InvalidDigit` if either operand is malformed
/// - `NegativeResult` if `lhs < rhs`
pub fn sub(base: u32, lhs: &str, rhs: &str) -> NumericResult<String> {
    Subtractor.apply_str(Radix::new(base)?, lhs, rhs)
}

/// Difference of two digit slices, most significant digit first.
pub(crate) fn sub_digits(radix: Radix, lhs: &[u8], rhs: &[u8]) -> NumericResult<DigitBuf> {
    let lhs = strip_leading_zeros(lhs);
    let rhs = strip_leading_zeros(rhs);

    if compare_digits(lhs, rhs) == Ordering::Less {
        return Err(ArithmeticError::NegativeResult);
    }

    let base = radix.get() as i32;
    let mut out = DigitBuf::with_capacity(lhs.len());
    let mut rhs_digits = rhs.iter().rev();
    let mut borrow = 0i32;

    // rhs is never longer than lhs, so walking lhs covers every position
    for &l in lhs.iter().rev() {
        let r = rhs_digits.next().map_or(0, |&d| d as i32);
        let mut diff = l as i32 - borrow - r;
        if diff < 0 {
            diff += base;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u8);
    }
    debug_assert_eq!(borrow, 0, "lhs >= rhs leaves no final borrow");

    out.reverse();
    normalize_buf(&mut out);
    Ok(out)
}
