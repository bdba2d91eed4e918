// ============================================================================
// Arithmatoy Library
// Arbitrary-precision unsigned arithmetic over digit strings in bases 2-36
// ============================================================================

//! # Arithmatoy
//!
//! Exact addition, subtraction and multiplication of non-negative integers
//! written as digit strings over the alphabet `0-9a-z`, in any base from 2
//! to 36.
//!
//! ## Features
//!
//! - **Pure functions**: `add`, `sub`, `mul` take a base and two digit strings
//!   and return a freshly allocated, normalized digit string
//! - **Explicit failures**: invalid digits, bad bases and negative
//!   differences are tagged errors, never sentinel values
//! - **Schoolbook algorithms**: carry/borrow propagation and partial-product
//!   accumulation, with no global state
//! - **Calculator** with configurable default base, operand limits,
//!   pluggable trace handlers and parallel batch evaluation
//!
//! ## Example
//!
//! ```rust
//! use arithmatoy::prelude::*;
//! use std::sync::Arc;
//!
//! assert_eq!(arithmatoy::add(10, "999", "1").unwrap(), "1000");
//! assert_eq!(arithmatoy::sub(10, "5", "9"), Err(ArithmeticError::NegativeResult));
//!
//! let calculator = Calculator::new(CalculatorConfig::hexadecimal(), Arc::new(LoggingTraceHandler));
//! let product = calculator.evaluate(&Calculation::mul("ff", "ff")).unwrap();
//! assert_eq!(product, "fe01");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

#[cfg(test)]
mod proptests;

pub use engine::{add, mul, sub};
pub use numeric::normalize;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Calculation, CalculationId, CalculatorConfig, Operation};
    pub use crate::engine::{
        algorithm_for, create_from_config, Adder, Calculator, CalculatorBuilder, Multiplier,
        Subtractor,
    };
    pub use crate::interfaces::{
        ArithmeticOperation, LoggingTraceHandler, NoOpTraceHandler, RecordingTraceHandler,
        TraceEvent, TraceHandler,
    };
    pub use crate::numeric::{ArithmeticError, Number, NumericResult, Radix};
}
