// ============================================================================
// Arithmetic Operation Interface
// Defines the contract for pluggable digit-string algorithms
// ============================================================================

use crate::domain::Operation;
use crate::numeric::{Number, NumericResult, Radix};

/// Strategy interface for the arithmetic algorithms.
/// Implementations: Adder, Subtractor, Multiplier.
pub trait ArithmeticOperation: Send + Sync {
    /// Apply the operation to two numbers in `radix`
    ///
    /// # Arguments
    /// * `radix` - Base shared by both operands
    /// * `lhs` - Left operand
    /// * `rhs` - Right operand
    ///
    /// # Returns
    /// A freshly allocated, normalized result
    fn apply(&self, radix: Radix, lhs: &Number, rhs: &Number) -> NumericResult<Number>;

    /// The operation this algorithm implements
    fn operation(&self) -> Operation;

    /// Algorithm name for logging
    fn name(&self) -> &str {
        self.operation().name()
    }

    /// Parse both operands, then apply.
    ///
    /// Both operands are fully validated before any arithmetic starts.
    fn apply_str(&self, radix: Radix, lhs: &str, rhs: &str) -> NumericResult<String> {
        let lhs = Number::parse(radix, lhs)?;
        let rhs = Number::parse(radix, rhs)?;
        self.apply(radix, &lhs, &rhs).map(|n| n.to_string())
    }
}
