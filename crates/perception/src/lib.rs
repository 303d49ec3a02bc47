//! Perception Boundary
//!
//! Normalized per-frame signals handed to the fusion core:
//! - Face presence and eye/mouth openness (from the face collaborator)
//! - Head position (center/left/right/down)
//! - Phone presence (from the object-detection collaborator)
//!
//! All landmark geometry, aspect ratios, and model confidences stay on the
//! collaborator side; only the derived booleans cross this boundary.

pub mod frame;
pub mod object;
pub mod source;

pub use frame::{HeadPosition, PerceptionFrame};
pub use object::ObjectReport;
pub use source::PerceptionSource;
