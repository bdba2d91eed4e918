// ============================================================================
// Domain Models Module
// Calculation requests and calculator configuration
// ============================================================================

pub mod calculation;
pub mod config;

pub use calculation::{Calculation, CalculationId, Operation};
pub use config::CalculatorConfig;
