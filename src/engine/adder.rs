// ============================================================================
// Adder
// Digit-by-digit addition with carry propagation
// ============================================================================

use crate::domain::Operation;
use crate::interfaces::ArithmeticOperation;
use crate::numeric::{normalize_buf, DigitBuf, Number, NumericResult, Radix};

/// Schoolbook addition
#[derive(Debug, Clone, Copy, Default)]
pub struct Adder;

impl ArithmeticOperation for Adder {
    fn apply(&self, radix: Radix, lhs: &Number, rhs: &Number) -> NumericResult<Number> {
        lhs.checked_add(rhs, radix)
    }

    fn operation(&self) -> Operation {
        Operation::Add
    }
}

/// Add two digit strings in `base`.
///
/// ```
/// assert_eq!(arithmatoy::add(10, "999", "1").unwrap(), "1000");
/// assert_eq!(arithmatoy::add(16, "ff", "1").unwrap(), "100");
/// ```
///
/// # Errors
/// - `InvalidBase` if `base` is outside [2, 36]
/// - `EmptyOperand` / `InvalidDigit` if either operand is malformed
pub fn add(base: u32, lhs: &str, rhs: &str) -> NumericResult<String> {
    Adder.apply_str(Radix::new(base)?, lhs, rhs)
}

/// Sum of two digit slices, most significant digit first.
///
/// Walks both operands from the end in lockstep; an exhausted operand
/// contributes zero. The result has at most `max(len) + 1` digits before
/// normalization.
pub(crate) fn add_digits(radix: Radix, lhs: &[u8], rhs: &[u8]) -> DigitBuf {
    let base = radix.get();
    let mut out = DigitBuf::with_capacity(lhs.len().max(rhs.len()) + 1);
    let mut lhs_digits = lhs.iter().rev();
    let mut rhs_digits = rhs.iter().rev();
    let mut carry = 0u32;

    loop {
        let (l, r) = (lhs_digits.next(), rhs_digits.next());
        if l.is_none() && r.is_none() && carry == 0 {
            break;
        }
        let sum = l.map_or(0, |&d| d as u32) + r.map_or(0, |&d| d as u32) + carry;
        out.push((sum % base) as u8);
        carry = sum / base;
    }

    out.reverse();
    normalize_buf(&mut out);
    out
}
