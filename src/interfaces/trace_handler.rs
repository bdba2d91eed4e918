// ============================================================================
// Trace Handler Interface
// Defines the contract for observing calculations
// ============================================================================

use crate::domain::{CalculationId, Operation};
use crate::numeric::ArithmeticError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by a calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TraceEvent {
    /// Calculation received; operands are present only when the
    /// calculator is configured to trace them
    CalculationStarted {
        id: CalculationId,
        operation: Operation,
        base: u32,
        lhs: Option<String>,
        rhs: Option<String>,
        timestamp: DateTime<Utc>,
    },

    /// Calculation produced a result
    CalculationCompleted {
        id: CalculationId,
        digits: usize,
        result: Option<String>,
        timestamp: DateTime<Utc>,
    },

    /// Calculation was rejected
    CalculationFailed {
        id: CalculationId,
        #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_error"))]
        error: ArithmeticError,
        timestamp: DateTime<Utc>,
    },
}

impl TraceEvent {
    pub fn id(&self) -> CalculationId {
        match self {
            TraceEvent::CalculationStarted { id, .. }
            | TraceEvent::CalculationCompleted { id, .. }
            | TraceEvent::CalculationFailed { id, .. } => *id,
        }
    }
}

#[cfg(feature = "serde")]
fn serialize_error<S: serde::Serializer>(
    error: &ArithmeticError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Trace handler trait for observing calculator events.
/// Replaces any process-wide verbosity switch: each calculator
/// carries its own handler.
pub trait TraceHandler: Send + Sync {
    /// Handle a trace event
    fn on_event(&self, event: TraceEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<TraceEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op trace handler
pub struct NoOpTraceHandler;

impl TraceHandler for NoOpTraceHandler {
    fn on_event(&self, _event: TraceEvent) {}
}

/// Logging trace handler, forwards to `tracing`
pub struct LoggingTraceHandler;

impl TraceHandler for LoggingTraceHandler {
    fn on_event(&self, event: TraceEvent) {
        match &event {
            TraceEvent::CalculationStarted {
                id,
                operation,
                base,
                lhs,
                rhs,
                ..
            } => {
                tracing::debug!(%id, base, ?lhs, ?rhs, "{}: entering calculation", operation);
            },
            TraceEvent::CalculationCompleted {
                id, digits, result, ..
            } => {
                tracing::debug!(%id, digits, ?result, "calculation completed");
            },
            TraceEvent::CalculationFailed { id, error, .. } => {
                tracing::warn!(%id, %error, "calculation failed");
            },
        }
    }
}

/// Trace handler that keeps every event in memory
#[derive(Default)]
pub struct RecordingTraceHandler {
    events: Mutex<Vec<TraceEvent>>,
}

impl RecordingTraceHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl TraceHandler for RecordingTraceHandler {
    fn on_event(&self, event: TraceEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<TraceEvent>) {
        self.events.lock().extend(events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(id: CalculationId) -> TraceEvent {
        TraceEvent::CalculationStarted {
            id,
            operation: Operation::Add,
            base: 10,
            lhs: None,
            rhs: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_noop_handler() {
        let handler = NoOpTraceHandler;
        handler.on_event(started(CalculationId::new()));
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingTraceHandler;
        handler.on_event(TraceEvent::CalculationFailed {
            id: CalculationId::new(),
            error: ArithmeticError::NegativeResult,
            timestamp: Utc::now(),
        });
    }

    #[test]
    fn test_recording_handler() {
        let handler = RecordingTraceHandler::new();
        assert!(handler.is_empty());

        let id = CalculationId::new();
        handler.on_event(started(id));
        handler.on_events(vec![TraceEvent::CalculationCompleted {
            id,
            digits: 3,
            result: None,
            timestamp: Utc::now(),
        }]);

        let events = handler.events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.id() == id));
        assert!(matches!(events[1], TraceEvent::CalculationCompleted { digits: 3, .. }));

        handler.clear();
        assert_eq!(handler.len(), 0);
    }
}
