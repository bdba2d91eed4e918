// ============================================================================
// Multiplier
// Schoolbook multiplication by partial-product accumulation
// ============================================================================

use super::adder::add_digits;
use crate::domain::Operation;
use crate::interfaces::ArithmeticOperation;
use crate::numeric::{strip_leading_zeros, DigitBuf, Number, NumericResult, Radix};
use smallvec::smallvec;

/// Schoolbook multiplication, O(len(lhs) * len(rhs))
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplier;

impl ArithmeticOperation for Multiplier {
    fn apply(&self, radix: Radix, lhs: &Number, rhs: &Number) -> NumericResult<Number> {
        lhs.checked_mul(rhs, radix)
    }

    fn operation(&self) -> Operation {
        Operation::Mul
    }
}

/// Multiply two digit strings in `base`.
///
/// ```
/// assert_eq!(arithmatoy::mul(10, "123", "456").unwrap(), "56088");
/// assert_eq!(arithmatoy::mul(2, "101", "11").unwrap(), "1111");
/// ```
///
/// # Errors
/// - `InvalidBase` if `base` is outside [2, 36]
/// - `EmptyOperand` / `InvalidDigit` if either operand is malformed; both
///   operands are checked before any partial product is computed
pub fn mul(base: u32, lhs: &str, rhs: &str) -> NumericResult<String> {
    Multiplier.apply_str(Radix::new(base)?, lhs, rhs)
}

/// Product of two digit slices, most significant digit first.
///
/// For each digit of the shorter operand, the longer operand is multiplied
/// by that digit into a zeroed buffer of width `len(lhs) + len(rhs)`,
/// shifted left by the digit's position, and the partial product is added
/// into the running total.
pub(crate) fn mul_digits(radix: Radix, lhs: &[u8], rhs: &[u8]) -> DigitBuf {
    let mut lhs = strip_leading_zeros(lhs);
    let mut rhs = strip_leading_zeros(rhs);
    if lhs.len() < rhs.len() {
        std::mem::swap(&mut lhs, &mut rhs);
    }

    let base = radix.get();
    let width = lhs.len() + rhs.len();
    let mut total: DigitBuf = smallvec![0];
    let mut partial: DigitBuf = smallvec![0; width];

    for (i, &multiplier) in rhs.iter().rev().enumerate() {
        partial.iter_mut().for_each(|d| *d = 0);

        let mut carry = 0u32;
        for (j, &digit) in lhs.iter().rev().enumerate() {
            let slot = width - 1 - i - j;
            let product = digit as u32 * multiplier as u32 + partial[slot] as u32 + carry;
            partial[slot] = (product % base) as u8;
            carry = product / base;
        }
        // carry < base, so it fits in the single slot above the partial product
        if carry != 0 {
            partial[width - 1 - i - lhs.len()] = carry as u8;
        }

        total = add_digits(radix, &total, &partial);
    }

    total
}
