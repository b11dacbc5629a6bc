//! Port for structured interaction logging.
//!
//! Defines the [`InteractionLogger`] trait for recording interaction events
//! (prompt submissions, dispatched prompts, model outputs, failures) to a
//! machine-readable transcript.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the transcript.

use serde_json::Value;

/// A structured interaction event for logging.
pub struct InteractionEvent {
    /// Event type identifier (e.g., "prompt_submitted", "model_output").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl InteractionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging interaction events.
///
/// `log` is synchronous and infallible; implementations swallow write
/// failures so a broken transcript never interrupts a request.
pub trait InteractionLogger: Send + Sync {
    fn log(&self, event: InteractionEvent);
}

/// No-op implementation for tests and when the transcript is disabled.
pub struct NoInteractionLogger;

impl InteractionLogger for NoInteractionLogger {
    fn log(&self, _event: InteractionEvent) {}
}
