//! Frame-by-frame fusion rules

use perception::PerceptionFrame;
use tracing::{debug, info};

use crate::alert::{Alert, AlertKind, Severity};
use crate::config::{ConfigError, FusionConfig};
use crate::state::{SignalHistory, StateSnapshot};

/// Signal fusion engine for one monitoring session.
///
/// Evaluates every detection rule on each frame and returns the raw rule
/// snapshot plus the candidate alerts. Rate limiting belongs to the
/// dispatcher; duration alerts here fire on every frame past their
/// threshold, not just on the first crossing.
pub struct SignalFusion {
    config: FusionConfig,
    history: SignalHistory,
}

impl SignalFusion {
    /// Create an engine with validated thresholds
    pub fn new(config: FusionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            history: SignalHistory::default(),
        })
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    pub fn history(&self) -> &SignalHistory {
        &self.history
    }

    /// Clear the rolling history (on driver change)
    pub fn reset(&mut self) {
        info!("fusion history reset");
        self.history.reset();
    }

    /// Analyze one frame. `now_ms` is milliseconds since session start.
    pub fn analyze(&mut self, frame: &PerceptionFrame, now_ms: u64) -> (StateSnapshot, Vec<Alert>) {
        let mut snapshot = StateSnapshot::default();
        let mut alerts = Vec::new();

        self.check_absence(frame, now_ms, &mut snapshot, &mut alerts);

        if frame.face_detected {
            let abnormal_blink = self.update_blink_rate(frame, now_ms, &mut snapshot);
            self.check_eye_closure(frame, now_ms, &mut snapshot, &mut alerts);

            // Sustained eye closure outranks the blink-rate signal: at most
            // one fatigue alert per frame.
            if abnormal_blink && !snapshot.fatigue_detected {
                alerts.push(Alert::new(
                    AlertKind::Fatigue,
                    "Taux de clignement anormalement bas",
                    Severity::Medium,
                ));
            }

            self.check_yawning(frame, now_ms, &mut snapshot, &mut alerts);
            self.check_head_movement(frame, now_ms, &mut snapshot, &mut alerts);
            self.check_gaze_deviation(frame, now_ms, &mut snapshot, &mut alerts);
        }

        // Phone detection does not require a visible face
        if frame.phone_detected {
            snapshot.phone_detected = true;
            alerts.push(Alert::new(
                AlertKind::Phone,
                "Téléphone détecté - Danger!",
                Severity::High,
            ));
        }

        if !alerts.is_empty() {
            debug!(count = alerts.len(), "candidate alerts for frame");
        }

        (snapshot, alerts)
    }

    fn check_absence(
        &mut self,
        frame: &PerceptionFrame,
        now_ms: u64,
        snapshot: &mut StateSnapshot,
        alerts: &mut Vec<Alert>,
    ) {
        if frame.face_detected {
            self.history.absence_since = None;
            return;
        }

        match self.history.absence_since {
            None => self.history.absence_since = Some(now_ms),
            Some(since) => {
                if now_ms - since > self.config.absence_time_ms {
                    snapshot.driver_absent = true;
                    alerts.push(Alert::new(
                        AlertKind::DriverAbsent,
                        "Conducteur absent",
                        Severity::High,
                    ));
                }
            }
        }
    }

    /// Record blink transitions and return whether the rate is abnormally low
    fn update_blink_rate(
        &mut self,
        frame: &PerceptionFrame,
        now_ms: u64,
        snapshot: &mut StateSnapshot,
    ) -> bool {
        // A blink is the closed→open transition
        if !self.history.last_eyes_open && frame.eyes_open {
            self.history.blink_times.push(now_ms);
        }
        self.history.last_eyes_open = frame.eyes_open;

        if self.history.blink_times.len() < 2 {
            return false;
        }
        let Some(&oldest) = self.history.blink_times.oldest() else {
            return false;
        };
        let window_ms = now_ms.saturating_sub(oldest);
        if window_ms == 0 {
            return false;
        }

        let rate = self.history.blink_times.len() as f64 / (window_ms as f64 / 1000.0);
        if rate < self.config.blink_rate_threshold {
            snapshot.abnormal_blink_rate = true;
            return true;
        }
        false
    }

    fn check_eye_closure(
        &mut self,
        frame: &PerceptionFrame,
        now_ms: u64,
        snapshot: &mut StateSnapshot,
        alerts: &mut Vec<Alert>,
    ) {
        if frame.eyes_open {
            self.history.eyes_closed_since = None;
            return;
        }

        match self.history.eyes_closed_since {
            None => self.history.eyes_closed_since = Some(now_ms),
            Some(since) => {
                if now_ms - since > self.config.eye_closed_time_ms {
                    snapshot.fatigue_detected = true;
                    alerts.push(Alert::new(
                        AlertKind::Fatigue,
                        "Somnolence détectée",
                        Severity::High,
                    ));
                }
            }
        }
    }

    fn check_yawning(
        &mut self,
        frame: &PerceptionFrame,
        now_ms: u64,
        snapshot: &mut StateSnapshot,
        alerts: &mut Vec<Alert>,
    ) {
        if frame.mouth_open {
            self.history.yawn_times.push(now_ms);
        }

        let recent = self
            .history
            .yawn_times
            .count_within(now_ms, self.config.yawn_window_ms);

        if recent >= self.config.yawn_count_threshold
            && !alerts.iter().any(|a| a.kind == AlertKind::Yawn)
        {
            snapshot.yawn_detected = true;
            alerts.push(Alert::new(
                AlertKind::Yawn,
                format!("Fatigue détectée ({recent} bâillements)"),
                Severity::Medium,
            ));
        }
    }

    fn check_head_movement(
        &mut self,
        frame: &PerceptionFrame,
        now_ms: u64,
        snapshot: &mut StateSnapshot,
        alerts: &mut Vec<Alert>,
    ) {
        self.history.head_history.push((now_ms, frame.head_position));

        if self.history.head_history.len() < self.config.head_window {
            return;
        }
        let recent = self.history.head_history.last_n(self.config.head_window);
        let changes = recent
            .windows(2)
            .filter(|pair| pair[0].1 != pair[1].1)
            .count();

        if changes >= self.config.head_change_threshold {
            snapshot.excessive_head_movement = true;
            alerts.push(Alert::new(
                AlertKind::Distraction,
                "Mouvements de tête excessifs détectés",
                Severity::Medium,
            ));
        }
    }

    fn check_gaze_deviation(
        &mut self,
        frame: &PerceptionFrame,
        now_ms: u64,
        snapshot: &mut StateSnapshot,
        alerts: &mut Vec<Alert>,
    ) {
        if !frame.head_position.is_sideways() {
            self.history.distraction_since = None;
            self.history.distraction_position = None;
            return;
        }

        match (
            self.history.distraction_since,
            self.history.distraction_position,
        ) {
            (Some(since), Some(position)) if position == frame.head_position => {
                if now_ms - since > self.config.distraction_time_ms {
                    snapshot.distraction_detected = true;
                    alerts.push(Alert::new(
                        AlertKind::Distraction,
                        "Distraction détectée (regard détourné)",
                        Severity::Medium,
                    ));
                }
            }
            _ => {
                // New run, or the gaze flipped sides: restart the timer
                self.history.distraction_since = Some(now_ms);
                self.history.distraction_position = Some(frame.head_position);
            }
        }
    }
}
