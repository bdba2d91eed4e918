// ============================================================================
// Arithmatoy CLI
// Command-line driver for the digit-string arithmetic core
// ============================================================================

use arithmatoy::prelude::*;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::Level;

/// Exact arithmetic on digit strings in bases 2 to 36
#[derive(Debug, Parser)]
#[command(name = "arithmatoy", version, about)]
struct Cli {
    /// Trace each calculation on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Operation: add, sub or mul
    operation: Operation,

    /// Base between 2 and 36
    #[arg(value_parser = clap::value_parser!(u32).range(2..=36))]
    base: u32,

    /// Left operand (digits 0-9a-z)
    lhs: String,

    /// Right operand (digits 0-9a-z)
    rhs: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let handler: Arc<dyn TraceHandler> = if cli.verbose {
        Arc::new(LoggingTraceHandler)
    } else {
        Arc::new(NoOpTraceHandler)
    };

    let calculator = match CalculatorBuilder::new()
        .radix(cli.base)
        .with_trace_operands(cli.verbose)
        .build(handler)
    {
        Ok(calculator) => calculator,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        },
    };

    let calculation = Calculation::new(cli.operation, cli.lhs, cli.rhs);
    match calculator.evaluate(&calculation) {
        Ok(result) => {
            println!("{}", result);
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}
