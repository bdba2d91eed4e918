// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod arithmetic_operation;
mod trace_handler;

pub use arithmetic_operation::ArithmeticOperation;
pub use trace_handler::{
    LoggingTraceHandler, NoOpTraceHandler, RecordingTraceHandler, TraceEvent, TraceHandler,
};
