// ============================================================================
// Radix
// Validated numeral base in [2, 36]
// ============================================================================

use super::errors::{ArithmeticError, NumericResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeral base in `[2, 36]`.
///
/// The base is never stored on a [`Number`](super::Number); it is supplied
/// per operation and must be the same for both operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Radix(u8);

impl Radix {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base (size of the `0-9a-z` alphabet)
    pub const MAX: u32 = 36;

    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEXADECIMAL: Self = Self(16);
    pub const BASE36: Self = Self(36);

    /// Create a radix, rejecting bases outside `[2, 36]`.
    ///
    /// # Errors
    /// Returns `InvalidBase` for any other value.
    #[inline]
    pub fn new(base: u32) -> NumericResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&base) {
            Ok(Self(base as u8))
        } else {
            Err(ArithmeticError::InvalidBase(base))
        }
    }

    /// The base as an integer.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Whether `value` is a valid digit in this base.
    #[inline]
    pub const fn admits(self, value: u8) -> bool {
        value < self.0
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl TryFrom<u32> for Radix {
    type Error = ArithmeticError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Self::new(base)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.get()
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
