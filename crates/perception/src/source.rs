//! Frame source trait for the host loop

use crate::frame::PerceptionFrame;

/// Supplies one `PerceptionFrame` per tick of the monitoring loop.
///
/// Implementations wrap a camera + detector stack, a recorded session, or a
/// scripted scenario. A source that loses its upstream must keep returning
/// default ("signal absent") frames; `None` means the stream ended and the
/// session should shut down.
pub trait PerceptionSource {
    fn next_frame(&mut self, now_ms: u64) -> Option<PerceptionFrame>;
}
