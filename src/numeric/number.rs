// ============================================================================
// Number
// Validated, normalized digit sequence and the leading-zero normalizer
// ============================================================================

use super::digit::{digit_value_in, encode};
use super::errors::{ArithmeticError, NumericResult};
use super::radix::Radix;
use crate::engine::{adder, multiplier, subtractor};
use smallvec::{smallvec, SmallVec};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Digit values, most significant first. Operands up to 32 digits stay inline.
pub(crate) type DigitBuf = SmallVec<[u8; 32]>;

// ============================================================================
// Normalizer
// ============================================================================

/// Strip leading `'0'` characters, keeping at least one digit.
///
/// An all-zero (or empty) string normalizes to `"0"`. No digit validation is
/// performed here.
///
/// ```
/// use arithmatoy::normalize;
///
/// assert_eq!(normalize("000120"), "120");
/// assert_eq!(normalize("0000"), "0");
/// ```
pub fn normalize(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Slice-level normalizer over digit values.
#[inline]
pub(crate) fn strip_leading_zeros(digits: &[u8]) -> &[u8] {
    match digits.iter().position(|&d| d != 0) {
        Some(first) => &digits[first..],
        None if digits.is_empty() => digits,
        None => &digits[digits.len() - 1..],
    }
}

/// In-place normalizer used on freshly computed buffers.
#[inline]
pub(crate) fn normalize_buf(digits: &mut DigitBuf) {
    let zeros = digits
        .iter()
        .position(|&d| d != 0)
        .unwrap_or_else(|| digits.len().saturating_sub(1));
    if zeros > 0 {
        digits.drain(..zeros);
    }
    if digits.is_empty() {
        digits.push(0);
    }
}

/// Numeric comparison of two normalized digit slices.
///
/// Shorter means smaller; on equal length the digit order decides.
#[inline]
pub(crate) fn compare_digits(lhs: &[u8], rhs: &[u8]) -> Ordering {
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}

/// Decode a digit string into values, validating every character.
pub(crate) fn decode(digits: &str, radix: Radix) -> NumericResult<DigitBuf> {
    if digits.is_empty() {
        return Err(ArithmeticError::EmptyOperand);
    }
    digits.chars().map(|c| digit_value_in(c, radix)).collect()
}

// ============================================================================
// Number
// ============================================================================

/// A non-negative integer as a normalized digit sequence.
///
/// Numbers are immutable values: every arithmetic operation returns a new,
/// owned `Number`. The base is not part of the value; it is passed to each
/// operation.
///
/// # Example
/// ```
/// use arithmatoy::numeric::{Number, Radix};
///
/// let a = Number::parse(Radix::HEXADECIMAL, "ff")?;
/// let b = Number::parse(Radix::HEXADECIMAL, "1")?;
/// assert_eq!(a.checked_add(&b, Radix::HEXADECIMAL)?.to_string(), "100");
/// # Ok::<(), arithmatoy::numeric::ArithmeticError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Number {
    digits: DigitBuf,
}

impl Number {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The value zero (`"0"`).
    pub fn zero() -> Self {
        Self { digits: smallvec![0] }
    }

    /// The value one (`"1"`).
    pub fn one() -> Self {
        Self { digits: smallvec![1] }
    }

    /// Parse a digit string in `radix`. Leading zeros are accepted and removed.
    ///
    /// # Errors
    /// - `EmptyOperand` if the string has no characters
    /// - `InvalidDigit` if any character is outside the alphabet or not below the base
    pub fn parse(radix: Radix, digits: &str) -> NumericResult<Self> {
        decode(digits, radix).map(Self::from_buf)
    }

    /// Build a number from a native integer.
    pub fn from_u128(mut value: u128, radix: Radix) -> Self {
        let base = radix.get() as u128;
        let mut digits = DigitBuf::new();
        loop {
            digits.push((value % base) as u8);
            value /= base;
            if value == 0 {
                break;
            }
        }
        digits.reverse();
        Self { digits }
    }

    pub(crate) fn from_buf(mut digits: DigitBuf) -> Self {
        normalize_buf(&mut digits);
        Self { digits }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Digit values, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits (at least one).
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.as_slice() == [0]
    }

    /// Convert to a native integer, or `None` on overflow.
    ///
    /// `radix` must be the base the number was built in.
    pub fn to_u128(&self, radix: Radix) -> Option<u128> {
        let base = radix.get() as u128;
        self.digits.iter().try_fold(0u128, |acc, &d| {
            acc.checked_mul(base)?.checked_add(d as u128)
        })
    }

    /// Check that every digit is valid in `radix`.
    ///
    /// A `Number` parsed in a larger base may hold digits the smaller base
    /// cannot represent.
    ///
    /// # Errors
    /// Returns `InvalidDigit` for the first offending digit.
    pub fn ensure_radix(&self, radix: Radix) -> NumericResult<()> {
        match self.digits.iter().find(|&&d| !radix.admits(d)) {
            Some(&d) => Err(ArithmeticError::InvalidDigit {
                digit: encode(d),
                base: radix.get(),
            }),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition in `radix`.
    ///
    /// # Errors
    /// Returns `InvalidDigit` if either operand has a digit not valid in `radix`.
    pub fn checked_add(&self, rhs: &Self, radix: Radix) -> NumericResult<Self> {
        self.ensure_radix(radix)?;
        rhs.ensure_radix(radix)?;
        Ok(Self {
            digits: adder::add_digits(radix, &self.digits, &rhs.digits),
        })
    }

    /// Checked subtraction in `radix`.
    ///
    /// # Errors
    /// - `InvalidDigit` if either operand has a digit not valid in `radix`
    /// - `NegativeResult` if `rhs` is greater than `self`
    pub fn checked_sub(&self, rhs: &Self, radix: Radix) -> NumericResult<Self> {
        self.ensure_radix(radix)?;
        rhs.ensure_radix(radix)?;
        subtractor::sub_digits(radix, &self.digits, &rhs.digits).map(|digits| Self { digits })
    }

    /// Checked schoolbook multiplication in `radix`.
    ///
    /// # Errors
    /// Returns `InvalidDigit` if either operand has a digit not valid in `radix`.
    pub fn checked_mul(&self, rhs: &Self, radix: Radix) -> NumericResult<Self> {
        self.ensure_radix(radix)?;
        rhs.ensure_radix(radix)?;
        Ok(Self {
            digits: multiplier::mul_digits(radix, &self.digits, &rhs.digits),
        })
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_digits(&self.digits, &other.digits)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.digits.iter().map(|&d| encode(d)).collect();
        f.write_str(&text)
    }
}

impl FromStr for Number {
    type Err = ArithmeticError;

    /// Parse in base 36, the full alphabet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Radix::BASE36, s)
    }
}
