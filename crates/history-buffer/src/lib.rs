//! Bounded History Buffer
//!
//! FIFO over a fixed capacity: pushing past capacity evicts the oldest
//! entry. Backs the rolling blink/yawn/head-position windows of the
//! fusion engine.

mod buffer;

pub use buffer::BoundedHistory;
