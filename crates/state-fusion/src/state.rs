//! Per-session rolling history and the per-frame snapshot

use history_buffer::BoundedHistory;
use perception::HeadPosition;
use serde::Serialize;

/// Retained closed→open transitions for blink-rate estimation
pub const BLINK_HISTORY_CAP: usize = 30;

/// Retained mouth-open timestamps for yawn counting
pub const YAWN_HISTORY_CAP: usize = 100;

/// Retained head positions for movement analysis
pub const HEAD_HISTORY_CAP: usize = 10;

/// Rolling signal history for one monitoring session.
///
/// Owned and mutated exclusively by the fusion engine. Every `_since` timer
/// is `None` exactly while its condition is inactive, and holds the first
/// timestamp at which the condition became active otherwise.
#[derive(Debug, Clone)]
pub struct SignalHistory {
    /// When the eyes first closed in the current closure run
    pub eyes_closed_since: Option<u64>,
    /// Timestamps of closed→open eye transitions
    pub blink_times: BoundedHistory<u64>,
    /// Timestamps of mouth-open frames
    pub yawn_times: BoundedHistory<u64>,
    /// Recent head positions with their timestamps
    pub head_history: BoundedHistory<(u64, HeadPosition)>,
    /// When the current sideways-gaze run started
    pub distraction_since: Option<u64>,
    /// Which side the current gaze run points to
    pub distraction_position: Option<HeadPosition>,
    /// When the face first disappeared
    pub absence_since: Option<u64>,
    /// Eye state from the previous frame (for blink transitions)
    pub last_eyes_open: bool,
}

impl Default for SignalHistory {
    fn default() -> Self {
        Self {
            eyes_closed_since: None,
            blink_times: BoundedHistory::new(BLINK_HISTORY_CAP),
            yawn_times: BoundedHistory::new(YAWN_HISTORY_CAP),
            head_history: BoundedHistory::new(HEAD_HISTORY_CAP),
            distraction_since: None,
            distraction_position: None,
            absence_since: None,
            last_eyes_open: true,
        }
    }
}

impl SignalHistory {
    /// Reset to a fresh session (on driver change)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which rules fired on the current frame.
///
/// Raw rule state for UI display: independent of dispatch cooldowns, so a
/// flag stays true on every frame the condition holds even when the
/// corresponding alert is being throttled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub fatigue_detected: bool,
    pub distraction_detected: bool,
    pub phone_detected: bool,
    pub driver_absent: bool,
    pub yawn_detected: bool,
    pub abnormal_blink_rate: bool,
    pub excessive_head_movement: bool,
}

impl StateSnapshot {
    /// True when any rule fired this frame
    pub fn any_active(&self) -> bool {
        self.fatigue_detected
            || self.distraction_detected
            || self.phone_detected
            || self.driver_absent
            || self.yawn_detected
            || self.abnormal_blink_rate
            || self.excessive_head_movement
    }
}
