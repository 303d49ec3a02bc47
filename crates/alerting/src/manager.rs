//! Alert Dispatcher Implementation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use state_fusion::{Alert, AlertKind};

/// Dispatch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Minimum gap between two alerts of the same kind (milliseconds)
    pub cooldown_ms: u64,
    /// Window during which a literally repeated message is not re-spoken
    /// (milliseconds)
    pub speech_repeat_ms: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 3_000,
            speech_repeat_ms: 5_000,
        }
    }
}

/// Outcome of one dispatch call.
///
/// `accepted` goes to the visual renderer; `speech`, when set, is the one
/// message the single-voice channel should say this frame.
#[derive(Debug, Clone, Default)]
pub struct DispatchDecision {
    pub accepted: Vec<Alert>,
    pub speech: Option<String>,
}

/// Per-session alert throttling state.
///
/// The per-kind cooldown map and the spoken-message state are independent:
/// a reworded message may be spoken again before the cooldown of its kind
/// expires, while a repeated wording stays silent across kinds.
pub struct AlertDispatcher {
    config: DispatchConfig,
    last_emitted: HashMap<AlertKind, u64>,
    last_spoken_message: Option<String>,
    last_spoken_ms: u64,
}

impl AlertDispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        info!(
            cooldown_ms = config.cooldown_ms,
            speech_repeat_ms = config.speech_repeat_ms,
            "creating alert dispatcher"
        );
        Self {
            config,
            last_emitted: HashMap::new(),
            last_spoken_message: None,
            last_spoken_ms: 0,
        }
    }

    /// Filter candidate alerts through the cooldown and speech rules.
    pub fn dispatch(&mut self, alerts: &[Alert], now_ms: u64) -> DispatchDecision {
        let mut decision = DispatchDecision::default();

        for alert in alerts {
            if !self.cooldown_elapsed(alert.kind, now_ms) {
                debug!(kind = alert.kind.as_str(), "alert suppressed by cooldown");
                continue;
            }
            self.last_emitted.insert(alert.kind, now_ms);
            warn!(
                kind = alert.kind.as_str(),
                severity = ?alert.severity,
                message = %alert.message,
                "alert"
            );
            decision.accepted.push(alert.clone());
        }

        // Single voice: only the first accepted alert is considered
        if let Some(first) = decision.accepted.first() {
            if self.should_speak(&first.message, now_ms) {
                self.last_spoken_message = Some(first.message.clone());
                self.last_spoken_ms = now_ms;
                decision.speech = Some(first.message.clone());
            }
        }

        decision
    }

    fn cooldown_elapsed(&self, kind: AlertKind, now_ms: u64) -> bool {
        match self.last_emitted.get(&kind) {
            None => true,
            Some(&last) => now_ms.saturating_sub(last) >= self.config.cooldown_ms,
        }
    }

    fn should_speak(&self, message: &str, now_ms: u64) -> bool {
        self.last_spoken_message.as_deref() != Some(message)
            || now_ms.saturating_sub(self.last_spoken_ms) > self.config.speech_repeat_ms
    }

    /// Forget all throttling state
    pub fn clear(&mut self) {
        self.last_emitted.clear();
        self.last_spoken_message = None;
        self.last_spoken_ms = 0;
    }
}

impl Default for AlertDispatcher {
    fn default() -> Self {
        Self::new(DispatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use state_fusion::Severity;

    fn phone_alert() -> Alert {
        Alert::new(
            AlertKind::Phone,
            "Téléphone détecté - Danger!",
            Severity::High,
        )
    }

    fn fatigue_alert() -> Alert {
        Alert::new(AlertKind::Fatigue, "Somnolence détectée", Severity::High)
    }

    #[test]
    fn test_cooldown_drops_rapid_repeat() {
        let mut dispatcher = AlertDispatcher::default();

        let decision = dispatcher.dispatch(&[phone_alert()], 0);
        assert_eq!(decision.accepted.len(), 1);

        // 1.0 s later: inside the 3.0 s cooldown
        let decision = dispatcher.dispatch(&[phone_alert()], 1_000);
        assert!(decision.accepted.is_empty());
        assert!(decision.speech.is_none());
    }

    #[test]
    fn test_cooldown_allows_after_expiry() {
        let mut dispatcher = AlertDispatcher::default();

        let decision = dispatcher.dispatch(&[phone_alert()], 0);
        assert_eq!(decision.accepted.len(), 1);

        // 3.1 s later: cooldown has elapsed
        let decision = dispatcher.dispatch(&[phone_alert()], 3_100);
        assert_eq!(decision.accepted.len(), 1);
    }

    #[test]
    fn test_cooldowns_are_per_kind() {
        let mut dispatcher = AlertDispatcher::default();

        dispatcher.dispatch(&[phone_alert()], 0);
        // A different kind is not throttled by the phone cooldown
        let decision = dispatcher.dispatch(&[fatigue_alert()], 1_000);
        assert_eq!(decision.accepted.len(), 1);
    }

    #[test]
    fn test_speech_dedup_by_message_and_window() {
        let mut dispatcher = AlertDispatcher::default();

        // "A" at t=0 speaks
        let a = Alert::new(AlertKind::Yawn, "A", Severity::Medium);
        let decision = dispatcher.dispatch(&[a.clone()], 0);
        assert_eq!(decision.speech.as_deref(), Some("A"));

        // Identical "A" at t=4s (a different kind, so it passes cooldown):
        // inside the 5 s repeat window, stays silent
        let a2 = Alert::new(AlertKind::Fatigue, "A", Severity::Medium);
        let decision = dispatcher.dispatch(&[a2], 4_000);
        assert_eq!(decision.accepted.len(), 1);
        assert!(decision.speech.is_none());

        // Different wording "B" speaks immediately even inside the window
        let b = Alert::new(AlertKind::Distraction, "B", Severity::Medium);
        let decision = dispatcher.dispatch(&[b], 4_100);
        assert_eq!(decision.speech.as_deref(), Some("B"));
    }

    #[test]
    fn test_repeated_message_respoken_after_window() {
        let mut dispatcher = AlertDispatcher::default();

        let a = Alert::new(AlertKind::Yawn, "A", Severity::Medium);
        let decision = dispatcher.dispatch(&[a.clone()], 0);
        assert_eq!(decision.speech.as_deref(), Some("A"));

        // Same wording after the 5 s window speaks again
        let decision = dispatcher.dispatch(&[a], 5_100);
        assert_eq!(decision.speech.as_deref(), Some("A"));
    }

    #[test]
    fn test_reworded_message_beats_cooldown_independence() {
        let mut dispatcher = AlertDispatcher::default();

        // Yawn count grows between frames: the kind stays cooled down,
        // but once it clears cooldown, the new wording speaks even
        // within 5 s of the previous utterance
        let y2 = Alert::new(AlertKind::Yawn, "Fatigue détectée (2 bâillements)", Severity::Medium);
        let y3 = Alert::new(AlertKind::Yawn, "Fatigue détectée (3 bâillements)", Severity::Medium);

        let decision = dispatcher.dispatch(&[y2], 0);
        assert!(decision.speech.is_some());

        let decision = dispatcher.dispatch(&[y3], 3_500);
        assert_eq!(decision.accepted.len(), 1);
        assert_eq!(
            decision.speech.as_deref(),
            Some("Fatigue détectée (3 bâillements)")
        );
    }

    #[test]
    fn test_speech_considers_only_first_accepted() {
        let mut dispatcher = AlertDispatcher::default();

        let decision = dispatcher.dispatch(&[fatigue_alert(), phone_alert()], 0);
        assert_eq!(decision.accepted.len(), 2);
        assert_eq!(decision.speech.as_deref(), Some("Somnolence détectée"));

        // Next frame: fatigue is cooled down, phone becomes the first
        // accepted alert but is itself cooled down too
        let decision = dispatcher.dispatch(&[fatigue_alert(), phone_alert()], 1_000);
        assert!(decision.accepted.is_empty());
        assert!(decision.speech.is_none());
    }

    #[test]
    fn test_clear_forgets_throttle_state() {
        let mut dispatcher = AlertDispatcher::default();
        dispatcher.dispatch(&[phone_alert()], 0);
        dispatcher.clear();
        let decision = dispatcher.dispatch(&[phone_alert()], 1_000);
        assert_eq!(decision.accepted.len(), 1);
        assert!(decision.speech.is_some());
    }
}
