//! Logging facilities for Accordion.
//!
//! Accordion uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // Your application code...
//! }
//! ```
//!
//! Every event is emitted with one of the [`targets`] below, so logs can be
//! filtered per subsystem, e.g. `RUST_LOG=accordion::projector=trace`.

/// Span names used throughout Accordion for tracing.
pub mod span_names {
    /// Projection rebuild span.
    pub const PROJECT: &str = "accordion::project";
    /// User-requested sort span.
    pub const SORT_REQUEST: &str = "accordion::sort_request";
}

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "accordion_core::signal";
    /// Section/item model target.
    pub const MODEL: &str = "accordion::model";
    /// Row projection target.
    pub const PROJECTOR: &str = "accordion::projector";
    /// Controller (host action surface) target.
    pub const CONTROLLER: &str = "accordion::controller";
    /// Configuration loading target.
    pub const CONFIG: &str = "accordion::config";
}

/// A guard for timing an operation.
///
/// Creates a `tracing` span that stays entered until the guard is dropped,
/// so subscribers that record span durations can time it.
///
/// ```ignore
/// let _span = PerfSpan::new(span_names::PROJECT);
/// // ... expensive work ...
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "accordion::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
