//! Signal Fusion Engine
//!
//! Frame-by-frame driver state analysis over normalized perception signals:
//! - Drowsiness (sustained eye closure, abnormal blink rate)
//! - Yawning frequency over a rolling window
//! - Distraction (sustained gaze deviation, erratic head movement)
//! - Driver absence and phone usage
//!
//! The engine is a pure function of (frame, accumulated history): no I/O,
//! no clocks, no inference. Timestamps are milliseconds relative to the
//! session start and are always passed in by the caller.

pub mod alert;
pub mod analyzer;
pub mod config;
pub mod state;

pub use alert::{Alert, AlertKind, Severity};
pub use analyzer::SignalFusion;
pub use config::{ConfigError, FusionConfig};
pub use state::{SignalHistory, StateSnapshot};
