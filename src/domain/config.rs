// ============================================================================
// Calculator Configuration
// Default radix, operand limits and trace detail
// ============================================================================

use crate::numeric::Radix;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for creating a calculator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Base used for calculations that do not name their own
    pub radix: Radix,

    /// Optional: Maximum number of characters per operand
    /// None means unlimited length
    pub max_digits: Option<usize>,

    /// Whether trace events carry operand and result strings
    /// (off by default: operands can be arbitrarily long)
    pub trace_operands: bool,
}

impl CalculatorConfig {
    /// Create a new configuration for the given radix
    pub fn new(radix: Radix) -> Self {
        Self {
            radix,
            max_digits: None,
            trace_operands: false,
        }
    }

    /// Builder method: Set maximum operand length
    pub fn with_max_digits(mut self, max: usize) -> Self {
        self.max_digits = Some(max);
        self
    }

    /// Builder method: Include operands and results in trace events
    pub fn with_trace_operands(mut self, enabled: bool) -> Self {
        self.trace_operands = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(max) = self.max_digits {
            if max == 0 {
                return Err("Maximum digit count must be positive".to_string());
            }
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::decimal()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculatorConfig {
    pub fn binary() -> Self {
        Self::new(Radix::BINARY)
    }

    pub fn octal() -> Self {
        Self::new(Radix::OCTAL)
    }

    pub fn decimal() -> Self {
        Self::new(Radix::DECIMAL)
    }

    pub fn hexadecimal() -> Self {
        Self::new(Radix::HEXADECIMAL)
    }

    /// Full `0-9a-z` alphabet
    pub fn base36() -> Self {
        Self::new(Radix::BASE36)
    }
}
