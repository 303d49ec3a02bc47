//! Renderer sinks and UI product copy

use serde::{Deserialize, Serialize};
use state_fusion::{Alert, AlertKind, Severity};

/// Banner color per severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertColor {
    Red,
    Orange,
    Yellow,
}

/// Severity to banner color mapping
pub fn severity_color(severity: Severity) -> AlertColor {
    match severity {
        Severity::High => AlertColor::Red,
        Severity::Medium => AlertColor::Orange,
        Severity::Low => AlertColor::Yellow,
    }
}

/// Canonical user-facing advisory per alert kind (product copy).
pub fn advisory_text(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Phone => "Veuillez ne pas utiliser le téléphone au volant",
        AlertKind::Fatigue => "Veillez à ne pas dormir au volant, restez vigilant",
        AlertKind::Distraction => "Vous ne regardez pas devant vous, concentrez-vous sur la route",
        AlertKind::DriverAbsent => "Conducteur absent, veuillez reprendre le contrôle du véhicule",
        AlertKind::Yawn => "Signes de fatigue détectés, faites une pause si nécessaire",
        AlertKind::AbnormalBlink => "Taux de clignement anormal, vous semblez fatigué",
        AlertKind::ExcessiveMovement => "Mouvements excessifs détectés, restez concentré",
    }
}

/// Draws an accepted alert over the current frame.
///
/// `F` is whatever frame handle the host renders into (a video frame, a
/// terminal, a test buffer). Must not block; the 0.5 s blink phase of the
/// banner indicator is derived from `now_ms` by the implementation.
pub trait VisualSink<F> {
    fn draw(&mut self, alert: &Alert, frame: &mut F, now_ms: u64);
}

/// Single-voice speech channel.
///
/// Implementations hand the message to a detached worker and return
/// immediately; failures are logged by the collaborator and never surface
/// to the frame loop.
pub trait SpeechSink {
    fn say(&self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors() {
        assert_eq!(severity_color(Severity::High), AlertColor::Red);
        assert_eq!(severity_color(Severity::Medium), AlertColor::Orange);
        assert_eq!(severity_color(Severity::Low), AlertColor::Yellow);
    }

    #[test]
    fn test_advisory_copy_covers_every_kind() {
        let kinds = [
            AlertKind::Fatigue,
            AlertKind::Distraction,
            AlertKind::Phone,
            AlertKind::DriverAbsent,
            AlertKind::Yawn,
            AlertKind::AbnormalBlink,
            AlertKind::ExcessiveMovement,
        ];
        for kind in kinds {
            assert!(!advisory_text(kind).is_empty());
        }
    }
}
