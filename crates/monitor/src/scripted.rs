//! Scripted perception source for the demo session

use perception::{HeadPosition, PerceptionFrame, PerceptionSource};

struct Segment {
    until_ms: u64,
    frame: PerceptionFrame,
}

/// Replays a fixed scenario instead of a live camera stack.
///
/// Each segment holds one frame template until its end time; the source
/// returns `None` once the script runs out, ending the session.
pub struct ScriptedPerception {
    segments: Vec<Segment>,
}

impl ScriptedPerception {
    /// Demo scenario: attentive driving, a drowsy episode, a yawning bout,
    /// a sustained glance to the left, phone usage, then leaving the seat.
    pub fn demo() -> Self {
        let attentive = PerceptionFrame::attentive();
        let drowsy = PerceptionFrame {
            eyes_open: false,
            ..attentive.clone()
        };
        let yawning = PerceptionFrame {
            mouth_open: true,
            ..attentive.clone()
        };
        let glancing = PerceptionFrame {
            head_position: HeadPosition::Left,
            ..attentive.clone()
        };
        let phone = PerceptionFrame {
            phone_detected: true,
            ..attentive.clone()
        };

        Self {
            segments: vec![
                Segment { until_ms: 4_000, frame: attentive.clone() },
                Segment { until_ms: 7_000, frame: drowsy },
                Segment { until_ms: 9_000, frame: attentive.clone() },
                Segment { until_ms: 11_000, frame: yawning },
                Segment { until_ms: 13_000, frame: attentive.clone() },
                Segment { until_ms: 16_000, frame: glancing },
                Segment { until_ms: 19_000, frame: phone },
                Segment { until_ms: 23_000, frame: PerceptionFrame::absent() },
                Segment { until_ms: 25_000, frame: attentive },
            ],
        }
    }
}

impl PerceptionSource for ScriptedPerception {
    fn next_frame(&mut self, now_ms: u64) -> Option<PerceptionFrame> {
        self.segments
            .iter()
            .find(|segment| now_ms < segment.until_ms)
            .map(|segment| segment.frame.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_script_phases() {
        let mut source = ScriptedPerception::demo();

        let early = source.next_frame(1_000).unwrap();
        assert!(early.face_detected);
        assert!(early.eyes_open);

        let drowsy = source.next_frame(5_000).unwrap();
        assert!(!drowsy.eyes_open);

        let yawning = source.next_frame(10_000).unwrap();
        assert!(yawning.mouth_open);

        let glancing = source.next_frame(14_000).unwrap();
        assert_eq!(glancing.head_position, HeadPosition::Left);

        let phone = source.next_frame(17_000).unwrap();
        assert!(phone.phone_detected);

        let gone = source.next_frame(21_000).unwrap();
        assert!(!gone.face_detected);
    }

    #[test]
    fn test_script_ends() {
        let mut source = ScriptedPerception::demo();
        assert!(source.next_frame(24_999).is_some());
        assert!(source.next_frame(25_000).is_none());
    }
}
