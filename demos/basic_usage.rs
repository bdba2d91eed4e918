// ============================================================================
// Basic Usage Example
// ============================================================================

use arithmatoy::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Arithmatoy Example ===\n");

    // Plain functions: base + two digit strings
    println!("999 + 1 (base 10)   = {}", arithmatoy::add(10, "999", "1").unwrap());
    println!("ff + 1 (base 16)    = {}", arithmatoy::add(16, "ff", "1").unwrap());
    println!("1000 - 999 (base 10) = {}", arithmatoy::sub(10, "1000", "999").unwrap());
    println!("101 * 11 (base 2)   = {}", arithmatoy::mul(2, "101", "11").unwrap());

    match arithmatoy::sub(10, "5", "9") {
        Ok(result) => println!("5 - 9 = {}", result),
        Err(e) => println!("5 - 9 fails: {}", e),
    }

    // Calculator with recorded trace events
    println!("\n=== Calculator ===");
    let recorder = Arc::new(RecordingTraceHandler::new());
    let calculator = CalculatorBuilder::new()
        .radix(36)
        .with_trace_operands(true)
        .build(recorder.clone())
        .unwrap();

    let calculations = vec![
        Calculation::mul("z", "z"),
        Calculation::add("hello", "world"),
        Calculation::sub("world", "hello"),
        Calculation::mul("1010", "11").with_base(2),
    ];

    for (calc, result) in calculations
        .iter()
        .zip(calculator.evaluate_batch(&calculations))
    {
        match result {
            Ok(value) => println!("  {} = {}", calc, value),
            Err(e) => println!("  {} failed: {}", calc, e),
        }
    }

    println!("\nTrace events recorded: {}", recorder.len());

    // Factorial of 30 by repeated multiplication
    println!("\n=== 30! ===");
    let mut factorial = "1".to_string();
    for i in 2u32..=30 {
        factorial = arithmatoy::mul(10, &factorial, &i.to_string()).unwrap();
    }
    println!("  {}", factorial);
}
