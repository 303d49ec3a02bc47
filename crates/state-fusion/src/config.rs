//! Fusion engine configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    ZeroThreshold { field: &'static str },

    #[error("blink_rate_threshold {0} must be a positive, finite rate")]
    InvalidBlinkRate(f64),

    #[error("head_change_threshold {threshold} cannot exceed the {window} pairs in the head window")]
    HeadThresholdTooLarge { threshold: usize, window: usize },
}

/// Detection thresholds for the fusion engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FusionConfig {
    /// Continuous eye closure before a drowsiness alert (milliseconds)
    pub eye_closed_time_ms: u64,

    /// Face absence before a driver-absent alert (milliseconds)
    pub absence_time_ms: u64,

    /// Sustained sideways gaze before a distraction alert (milliseconds)
    pub distraction_time_ms: u64,

    /// Trailing window for yawn counting (milliseconds)
    pub yawn_window_ms: u64,

    /// Yawns within the window that trigger an alert
    pub yawn_count_threshold: usize,

    /// Blink rate below this is abnormal (blinks per second)
    pub blink_rate_threshold: f64,

    /// Most recent head positions inspected for erratic movement
    pub head_window: usize,

    /// Position changes among those that trigger an alert
    pub head_change_threshold: usize,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            eye_closed_time_ms: 1200,
            absence_time_ms: 2500,
            distraction_time_ms: 1500,
            yawn_window_ms: 60_000,
            yawn_count_threshold: 2,
            blink_rate_threshold: 0.15,
            head_window: 5,
            head_change_threshold: 4,
        }
    }
}

impl FusionConfig {
    /// Stricter thresholds (alerts sooner)
    pub fn strict() -> Self {
        Self {
            eye_closed_time_ms: 800,
            absence_time_ms: 1500,
            distraction_time_ms: 1000,
            ..Default::default()
        }
    }

    /// More lenient thresholds (fewer alerts)
    pub fn lenient() -> Self {
        Self {
            eye_closed_time_ms: 2000,
            absence_time_ms: 4000,
            distraction_time_ms: 3000,
            yawn_count_threshold: 3,
            ..Default::default()
        }
    }

    /// Reject thresholds that would make a rule vacuous or divide by zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.eye_closed_time_ms == 0 {
            return Err(ConfigError::ZeroThreshold {
                field: "eye_closed_time_ms",
            });
        }
        if self.absence_time_ms == 0 {
            return Err(ConfigError::ZeroThreshold {
                field: "absence_time_ms",
            });
        }
        if self.distraction_time_ms == 0 {
            return Err(ConfigError::ZeroThreshold {
                field: "distraction_time_ms",
            });
        }
        if self.yawn_window_ms == 0 {
            return Err(ConfigError::ZeroThreshold {
                field: "yawn_window_ms",
            });
        }
        if self.yawn_count_threshold == 0 {
            return Err(ConfigError::ZeroThreshold {
                field: "yawn_count_threshold",
            });
        }
        if !self.blink_rate_threshold.is_finite() || self.blink_rate_threshold <= 0.0 {
            return Err(ConfigError::InvalidBlinkRate(self.blink_rate_threshold));
        }
        if self.head_window < 2 {
            return Err(ConfigError::ZeroThreshold {
                field: "head_window",
            });
        }
        if self.head_change_threshold > self.head_window - 1 {
            return Err(ConfigError::HeadThresholdTooLarge {
                threshold: self.head_change_threshold,
                window: self.head_window - 1,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(FusionConfig::default().validate().is_ok());
        assert!(FusionConfig::strict().validate().is_ok());
        assert!(FusionConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_presets_order() {
        let strict = FusionConfig::strict();
        let default = FusionConfig::default();
        let lenient = FusionConfig::lenient();
        assert!(strict.eye_closed_time_ms < default.eye_closed_time_ms);
        assert!(default.eye_closed_time_ms < lenient.eye_closed_time_ms);
        assert!(strict.absence_time_ms < lenient.absence_time_ms);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = FusionConfig {
            eye_closed_time_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unreachable_head_threshold_rejected() {
        let config = FusionConfig {
            head_window: 5,
            head_change_threshold: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_blink_rate_rejected() {
        let config = FusionConfig {
            blink_rate_threshold: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
