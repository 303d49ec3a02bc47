//! Object detection report (phone signal)

use serde::{Deserialize, Serialize};

/// Minimum confidence for a phone detection to count as a signal
pub const PHONE_CONFIDENCE_GATE: f32 = 0.5;

/// Raw object-detection output for one frame.
///
/// The bounding box and confidence exist for rendering overlays only; the
/// fusion core consumes nothing but the gated boolean.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectReport {
    /// Phone detection confidence (0.0 when nothing was detected)
    pub phone_confidence: f32,
    /// Bounding box [x, y, width, height] of the detected phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_bbox: Option<[f32; 4]>,
}

impl ObjectReport {
    /// Apply the confidence gate and reduce to the boolean phone signal
    pub fn phone_signal(&self) -> bool {
        self.phone_confidence > PHONE_CONFIDENCE_GATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_gate() {
        let weak = ObjectReport {
            phone_confidence: 0.4,
            phone_bbox: Some([10.0, 10.0, 80.0, 120.0]),
        };
        assert!(!weak.phone_signal());

        let strong = ObjectReport {
            phone_confidence: 0.82,
            phone_bbox: Some([10.0, 10.0, 80.0, 120.0]),
        };
        assert!(strong.phone_signal());
    }

    #[test]
    fn test_empty_report_has_no_signal() {
        assert!(!ObjectReport::default().phone_signal());
    }
}
