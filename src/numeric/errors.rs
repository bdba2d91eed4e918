// ============================================================================
// Arithmetic Errors
// Error types for digit-string arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur while decoding or computing digit strings.
///
/// Allocation failure has no variant: the global allocator aborts the
/// process, and no partial result is ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// Character outside `0-9a-z`, or a digit whose value is not below the base
    InvalidDigit { digit: char, base: u32 },
    /// Numeric value that has no digit character (greater than 35)
    DigitValueOutOfRange(u32),
    /// Base outside [2, 36]
    InvalidBase(u32),
    /// Subtraction whose minuend is smaller than its subtrahend
    NegativeResult,
    /// Operand string with no digits
    EmptyOperand,
    /// Operand longer than the configured digit limit
    OperandTooLong { len: usize, max: usize },
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::InvalidDigit { digit, base } => {
                write!(f, "invalid digit {:?} for base {}", digit, base)
            },
            ArithmeticError::DigitValueOutOfRange(value) => {
                write!(f, "digit value {} is outside the range 0-35", value)
            },
            ArithmeticError::InvalidBase(base) => {
                write!(f, "invalid base {}: must be between 2 and 36", base)
            },
            ArithmeticError::NegativeResult => write!(
                f,
                "negative result: left operand is smaller than right operand"
            ),
            ArithmeticError::EmptyOperand => write!(f, "empty operand: expected at least one digit"),
            ArithmeticError::OperandTooLong { len, max } => {
                write!(f, "operand has {} digits, limit is {}", len, max)
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for arithmetic operations
pub type NumericResult<T> = Result<T, ArithmeticError>;
