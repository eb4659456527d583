//! Observability hooks for resolution.
//!
//! Hosts plug their profiling or tracing sink in through [`Tracer`]. Calls
//! are best effort: a tracer must never influence the resolution outcome.

use std::sync::Mutex;

use log::{debug, trace};

/// Sink for resolution diagnostics.
pub trait Tracer: Send + Sync {
    /// Record a free-form diagnostic message.
    fn trace(&self, message: &str);

    /// Mark the start of a named operation.
    fn start_operation(&self, name: &str);

    /// Mark the end of the most recently started operation with this name.
    fn end_operation(&self, name: &str);
}

/// Forwards diagnostics to the `log` facade.
///
/// Messages go out at `trace` level, operation boundaries at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn trace(&self, message: &str) {
        trace!("{message}");
    }

    fn start_operation(&self, name: &str) {
        debug!("begin {name}");
    }

    fn end_operation(&self, name: &str) {
        debug!("end {name}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTracer;

impl Tracer for NullTracer {
    fn trace(&self, _message: &str) {}

    fn start_operation(&self, _name: &str) {}

    fn end_operation(&self, _name: &str) {}
}

/// Keeps every event in memory, for tests and diagnostics.
///
/// Operation boundaries are recorded as `begin <name>` / `end <name>`.
#[derive(Debug, Default)]
pub struct RecordingTracer {
    events: Mutex<Vec<String>>,
}

impl RecordingTracer {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: String) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Tracer for RecordingTracer {
    fn trace(&self, message: &str) {
        self.push(message.to_string());
    }

    fn start_operation(&self, name: &str) {
        self.push(format!("begin {name}"));
    }

    fn end_operation(&self, name: &str) {
        self.push(format!("end {name}"));
    }
}

/// Ends an operation when dropped.
///
/// # Examples
///
/// ```
/// use itemres::trace::{OperationScope, RecordingTracer};
///
/// let tracer = RecordingTracer::new();
/// {
///     let _scope = OperationScope::start(&tracer, "resolve");
/// }
/// assert_eq!(tracer.events(), ["begin resolve", "end resolve"]);
/// ```
#[must_use = "the operation ends as soon as the scope is dropped"]
pub struct OperationScope<'a> {
    tracer: &'a dyn Tracer,
    name: &'static str,
}

impl<'a> OperationScope<'a> {
    /// Start `name` on `tracer`.
    pub fn start(tracer: &'a dyn Tracer, name: &'static str) -> Self {
        tracer.start_operation(name);
        Self { tracer, name }
    }
}

impl Drop for OperationScope<'_> {
    fn drop(&mut self) {
        self.tracer.end_operation(self.name);
    }
}
