// ============================================================================
// Numeric Module
// Digit alphabet, radix and the digit-string number type
// ============================================================================
//
// This module provides:
// - Digit codec: character <-> value over the `0-9a-z` alphabet
// - Radix: validated base in [2, 36]
// - Number: normalized, immutable digit sequence
// - ArithmeticError: error types for every operation
//
// Design principles:
// - Invalid digits are always reported, never coerced to a default value
// - All arithmetic returns Result (no panics)
// - No process-wide state; every call owns its buffers

mod digit;
mod errors;
mod number;
mod radix;

pub use digit::{digit_value, digit_value_in, value_to_digit, ALPHABET};
pub use errors::{ArithmeticError, NumericResult};
pub use number::{normalize, Number};
pub use radix::Radix;

pub(crate) use number::{compare_digits, normalize_buf, strip_leading_zeros, DigitBuf};
