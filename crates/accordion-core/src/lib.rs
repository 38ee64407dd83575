//! Core systems for Accordion.
//!
//! This crate provides the infrastructure shared by the accordion model and
//! its hosts:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Logging**: `tracing` targets and span names used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use accordion_core::Signal;
//!
//! let expansion_changed = Signal::<(usize, bool)>::new();
//!
//! let conn_id = expansion_changed.connect(|(section, expanded)| {
//!     println!("section {} expanded: {}", section, expanded);
//! });
//!
//! expansion_changed.emit((0, true));
//! expansion_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
