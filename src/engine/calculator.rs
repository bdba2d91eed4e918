// ============================================================================
// Calculator
// Validates calculation requests and dispatches them to the algorithms
// ============================================================================

use super::{Adder, Multiplier, Subtractor};
use crate::domain::{Calculation, CalculatorConfig, Operation};
use crate::interfaces::{ArithmeticOperation, TraceEvent, TraceHandler};
use crate::numeric::{ArithmeticError, NumericResult, Radix};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static ADDER: Adder = Adder;
static SUBTRACTOR: Subtractor = Subtractor;
static MULTIPLIER: Multiplier = Multiplier;

/// The algorithm implementing `operation`.
pub fn algorithm_for(operation: Operation) -> &'static dyn ArithmeticOperation {
    match operation {
        Operation::Add => &ADDER,
        Operation::Sub => &SUBTRACTOR,
        Operation::Mul => &MULTIPLIER,
    }
}

/// Stateless-per-call calculator with a pluggable trace handler.
///
/// The only shared state is an evaluation counter; calculations never
/// observe each other, so one calculator can serve many threads.
pub struct Calculator {
    /// Default radix, operand limit and trace detail
    config: CalculatorConfig,

    /// Receives one start event and one outcome event per calculation
    trace_handler: Arc<dyn TraceHandler>,

    /// Number of calculations evaluated so far
    evaluations: AtomicU64,
}

impl Calculator {
    /// Create a new calculator. Use `create_from_config` to validate the
    /// configuration first.
    pub fn new(config: CalculatorConfig, trace_handler: Arc<dyn TraceHandler>) -> Self {
        Self {
            config,
            trace_handler,
            evaluations: AtomicU64::new(0),
        }
    }

    /// Evaluate one calculation
    pub fn evaluate(&self, calculation: &Calculation) -> NumericResult<String> {
        self.evaluations.fetch_add(1, Ordering::Relaxed);

        let trace_operands = self.config.trace_operands;
        self.trace_handler.on_event(TraceEvent::CalculationStarted {
            id: calculation.id,
            operation: calculation.operation,
            base: calculation.base.unwrap_or(self.config.radix.get()),
            lhs: trace_operands.then(|| calculation.lhs.clone()),
            rhs: trace_operands.then(|| calculation.rhs.clone()),
            timestamp: Utc::now(),
        });

        let outcome = self.compute(calculation);

        let event = match &outcome {
            Ok(result) => TraceEvent::CalculationCompleted {
                id: calculation.id,
                digits: result.len(),
                result: trace_operands.then(|| result.clone()),
                timestamp: Utc::now(),
            },
            Err(error) => TraceEvent::CalculationFailed {
                id: calculation.id,
                error: *error,
                timestamp: Utc::now(),
            },
        };
        self.trace_handler.on_event(event);

        outcome
    }

    /// Evaluate independent calculations on scoped worker threads.
    ///
    /// Results are returned in input order.
    pub fn evaluate_batch(&self, calculations: &[Calculation]) -> Vec<NumericResult<String>> {
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(calculations.len());
        if workers <= 1 {
            return calculations.iter().map(|c| self.evaluate(c)).collect();
        }

        let chunk_size = calculations.len().div_ceil(workers);
        let joined = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = calculations
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move |_| {
                        chunk
                            .iter()
                            .map(|c| self.evaluate(c))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Result<Vec<_>, _>>()
        });

        match joined {
            Ok(Ok(parts)) => parts.into_iter().flatten().collect(),
            Ok(Err(panic)) | Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    fn compute(&self, calculation: &Calculation) -> NumericResult<String> {
        let radix = match calculation.base {
            Some(base) => Radix::new(base)?,
            None => self.config.radix,
        };
        self.check_length(&calculation.lhs)?;
        self.check_length(&calculation.rhs)?;

        algorithm_for(calculation.operation).apply_str(radix, &calculation.lhs, &calculation.rhs)
    }

    fn check_length(&self, operand: &str) -> NumericResult<()> {
        match self.config.max_digits {
            Some(max) => {
                let len = operand.chars().count();
                if len > max {
                    Err(ArithmeticError::OperandTooLong { len, max })
                } else {
                    Ok(())
                }
            },
            None => Ok(()),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Default radix for calculations without an explicit base
    pub fn radix(&self) -> Radix {
        self.config.radix
    }

    /// Number of calculations evaluated so far
    pub fn evaluation_count(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{NoOpTraceHandler, RecordingTraceHandler};

    fn decimal_calculator() -> Calculator {
        Calculator::new(CalculatorConfig::decimal(), Arc::new(NoOpTraceHandler))
    }

    #[test]
    fn test_algorithm_dispatch() {
        assert_eq!(algorithm_for(Operation::Add).name(), "add");
        assert_eq!(algorithm_for(Operation::Sub).operation(), Operation::Sub);
        assert_eq!(algorithm_for(Operation::Mul).name(), "mul");
    }

    #[test]
    fn test_evaluate_uses_default_radix() {
        let calc = Calculator::new(CalculatorConfig::hexadecimal(), Arc::new(NoOpTraceHandler));
        assert_eq!(calc.evaluate(&Calculation::add("ff", "1")).unwrap(), "100");
        assert_eq!(calc.radix(), Radix::HEXADECIMAL);
    }

    #[test]
    fn test_evaluate_explicit_base() {
        let calc = decimal_calculator();
        let binary = Calculation::mul("101", "11").with_base(2);
        assert_eq!(calc.evaluate(&binary).unwrap(), "1111");

        let invalid = Calculation::add("1", "1").with_base(99);
        assert_eq!(calc.evaluate(&invalid), Err(ArithmeticError::InvalidBase(99)));
    }

    #[test]
    fn test_evaluate_negative_result() {
        let calc = decimal_calculator();
        assert_eq!(
            calc.evaluate(&Calculation::sub("5", "9")),
            Err(ArithmeticError::NegativeResult)
        );
    }

    #[test]
    fn test_operand_limit() {
        let calc = Calculator::new(
            CalculatorConfig::decimal().with_max_digits(4),
            Arc::new(NoOpTraceHandler),
        );
        assert_eq!(calc.evaluate(&Calculation::add("9999", "1")).unwrap(), "10000");
        assert_eq!(
            calc.evaluate(&Calculation::add("12345", "1")),
            Err(ArithmeticError::OperandTooLong { len: 5, max: 4 })
        );
    }

    #[test]
    fn test_trace_events() {
        let recorder = Arc::new(RecordingTraceHandler::new());
        let calc = Calculator::new(
            CalculatorConfig::decimal().with_trace_operands(true),
            recorder.clone(),
        );

        let ok = Calculation::add("999", "1");
        let bad = Calculation::sub("1", "2");
        calc.evaluate(&ok).unwrap();
        calc.evaluate(&bad).unwrap_err();

        let events = recorder.events();
        assert_eq!(events.len(), 4);
        assert!(matches!(
            &events[0],
            TraceEvent::CalculationStarted { id, lhs: Some(lhs), base: 10, .. }
                if *id == ok.id && lhs == "999"
        ));
        assert!(matches!(
            &events[1],
            TraceEvent::CalculationCompleted { digits: 4, result: Some(r), .. } if r == "1000"
        ));
        assert!(matches!(
            &events[3],
            TraceEvent::CalculationFailed { id, error: ArithmeticError::NegativeResult, .. }
                if *id == bad.id
        ));
    }

    #[test]
    fn test_trace_omits_operands_by_default() {
        let recorder = Arc::new(RecordingTraceHandler::new());
        let calc = Calculator::new(CalculatorConfig::decimal(), recorder.clone());
        calc.evaluate(&Calculation::mul("12", "12")).unwrap();

        let events = recorder.events();
        assert!(matches!(
            &events[0],
            TraceEvent::CalculationStarted { lhs: None, rhs: None, .. }
        ));
        assert!(matches!(
            &events[1],
            TraceEvent::CalculationCompleted { digits: 3, result: None, .. }
        ));
    }

    #[test]
    fn test_evaluate_batch_preserves_order() {
        let calc = decimal_calculator();
        let batch: Vec<Calculation> = (0..64u32)
            .map(|i| Calculation::mul(i.to_string(), (i + 1).to_string()))
            .collect();

        let results = calc.evaluate_batch(&batch);
        assert_eq!(results.len(), 64);
        for (i, result) in results.iter().enumerate() {
            let expected = (i as u64 * (i as u64 + 1)).to_string();
            assert_eq!(result.as_deref(), Ok(expected.as_str()));
        }
        assert_eq!(calc.evaluation_count(), 64);
    }

    #[test]
    fn test_evaluate_batch_mixed_outcomes() {
        let calc = decimal_calculator();
        let batch = vec![
            Calculation::add("1", "1"),
            Calculation::sub("1", "2"),
            Calculation::mul("x", "2"),
        ];
        let results = calc.evaluate_batch(&batch);
        assert_eq!(results[0].as_deref(), Ok("2"));
        assert_eq!(results[1], Err(ArithmeticError::NegativeResult));
        assert_eq!(
            results[2],
            Err(ArithmeticError::InvalidDigit { digit: 'x', base: 10 })
        );
    }

    #[test]
    fn test_evaluate_batch_empty() {
        let calc = decimal_calculator();
        assert!(calc.evaluate_batch(&[]).is_empty());
        assert_eq!(calc.evaluation_count(), 0);
    }
}
