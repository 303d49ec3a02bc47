//! Alert Dispatch
//!
//! Decides which candidate alerts actually reach the rendering
//! collaborators: per-kind cooldown suppression, plus a separate
//! repetition rule for the single-voice speech channel. The dispatcher
//! returns data only; invoking renderers is the caller's job.

mod manager;
mod sink;

pub use manager::{AlertDispatcher, DispatchConfig, DispatchDecision};
pub use sink::{advisory_text, severity_color, AlertColor, SpeechSink, VisualSink};
