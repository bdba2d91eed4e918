// ============================================================================
// Engine Module
// Contains the arithmetic algorithms and the calculator that drives them
// ============================================================================

pub(crate) mod adder;
mod calculator;
pub(crate) mod multiplier;
pub(crate) mod subtractor;

pub mod factory;

pub use adder::{add, Adder};
pub use calculator::{algorithm_for, Calculator};
pub use factory::{create_from_config, CalculatorBuilder};
pub use multiplier::{mul, Multiplier};
pub use subtractor::{sub, Subtractor};
