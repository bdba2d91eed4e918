// ============================================================================
// Digit Codec
// Conversion between alphabet characters and digit values
// ============================================================================

use super::errors::{ArithmeticError, NumericResult};
use super::radix::Radix;

/// The ordered digit alphabet. A digit's value is its index in this string.
pub const ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

const ALPHABET_BYTES: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Map a digit character to its value in `[0, 35]`.
///
/// Only lowercase letters are accepted. The error reports base 36, the
/// whole alphabet, since no base is known at this level.
///
/// # Errors
/// Returns `InvalidDigit` for any character outside the alphabet.
#[inline]
pub fn digit_value(digit: char) -> NumericResult<u8> {
    match digit {
        '0'..='9' => Ok(digit as u8 - b'0'),
        'a'..='z' => Ok(digit as u8 - b'a' + 10),
        _ => Err(ArithmeticError::InvalidDigit {
            digit,
            base: Radix::MAX,
        }),
    }
}

/// Map a value in `[0, 35]` back to its digit character.
///
/// # Errors
/// Returns `DigitValueOutOfRange` for values above 35.
#[inline]
pub fn value_to_digit(value: u32) -> NumericResult<char> {
    ALPHABET_BYTES
        .get(value as usize)
        .map(|&b| b as char)
        .ok_or(ArithmeticError::DigitValueOutOfRange(value))
}

/// Decode a digit character that must also be valid in `radix`.
///
/// # Errors
/// Returns `InvalidDigit` (tagged with the radix) if the character is outside
/// the alphabet or its value is not below the base.
#[inline]
pub fn digit_value_in(digit: char, radix: Radix) -> NumericResult<u8> {
    match digit_value(digit) {
        Ok(value) if radix.admits(value) => Ok(value),
        _ => Err(ArithmeticError::InvalidDigit {
            digit,
            base: radix.get(),
        }),
    }
}

/// Encode an internal digit value. Values come from `mod base` arithmetic,
/// so they are always below 36.
#[inline]
pub(crate) fn encode(value: u8) -> char {
    ALPHABET_BYTES[value as usize] as char
}
