//! Per-frame perception signals

use serde::{Deserialize, Serialize};

/// Coarse head position relative to the road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadPosition {
    #[default]
    Center,
    Left,
    Right,
    Down,
}

impl HeadPosition {
    /// True when the gaze is deviated to either side
    pub fn is_sideways(&self) -> bool {
        matches!(self, HeadPosition::Left | HeadPosition::Right)
    }
}

/// Normalized perception signals for one camera frame.
///
/// When `face_detected` is false the face-dependent fields are don't-care;
/// a collaborator that fails must report this default frame rather than
/// propagate an error downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerceptionFrame {
    /// A face is visible in the frame
    pub face_detected: bool,
    /// Both eyes are open
    pub eyes_open: bool,
    /// Mouth open wide enough to count as a yawn
    pub mouth_open: bool,
    /// Coarse head position
    pub head_position: HeadPosition,
    /// Object detection reported a phone
    pub phone_detected: bool,
}

impl Default for PerceptionFrame {
    fn default() -> Self {
        Self {
            face_detected: false,
            eyes_open: true,
            mouth_open: false,
            head_position: HeadPosition::Center,
            phone_detected: false,
        }
    }
}

impl PerceptionFrame {
    /// Frame with an attentive driver: face visible, eyes open, head center
    pub fn attentive() -> Self {
        Self {
            face_detected: true,
            ..Default::default()
        }
    }

    /// The "signal absent" frame collaborators substitute on failure
    pub fn absent() -> Self {
        Self::default()
    }
}
