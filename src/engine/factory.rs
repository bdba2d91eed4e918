// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::TraceHandler;
use crate::numeric::Radix;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `trace_handler` - Handler for calculation trace events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use arithmatoy::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::hexadecimal();
/// let calculator = create_from_config(config, Arc::new(NoOpTraceHandler)).unwrap();
/// assert_eq!(calculator.evaluate(&Calculation::add("ff", "1")).unwrap(), "100");
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    trace_handler: Arc<dyn TraceHandler>,
) -> Result<Calculator, String> {
    config.validate()?;
    Ok(Calculator::new(config, trace_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use arithmatoy::prelude::*;
/// use std::sync::Arc;
///
/// let calculator = CalculatorBuilder::new()
///     .radix(2)
///     .with_max_digits(256)
///     .build(Arc::new(NoOpTraceHandler))
///     .unwrap();
/// assert_eq!(calculator.evaluate(&Calculation::mul("101", "11")).unwrap(), "1111");
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    radix_error: Option<String>,
}

impl CalculatorBuilder {
    /// Create a new builder (decimal, unlimited operands)
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            radix_error: None,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            radix_error: None,
        }
    }

    /// Set the default base; an invalid base is reported by `build`
    pub fn radix(mut self, base: u32) -> Self {
        match Radix::new(base) {
            Ok(radix) => {
                self.config.radix = radix;
                self.radix_error = None;
            },
            Err(e) => self.radix_error = Some(e.to_string()),
        }
        self
    }

    /// Set maximum operand length
    pub fn with_max_digits(mut self, max: usize) -> Self {
        self.config.max_digits = Some(max);
        self
    }

    /// Include operands and results in trace events
    pub fn with_trace_operands(mut self, enabled: bool) -> Self {
        self.config.trace_operands = enabled;
        self
    }

    /// Build the calculator
    pub fn build(self, trace_handler: Arc<dyn TraceHandler>) -> Result<Calculator, String> {
        if let Some(error) = self.radix_error {
            return Err(error);
        }
        create_from_config(self.config, trace_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
