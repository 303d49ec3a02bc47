//! Alert taxonomy

use serde::{Deserialize, Serialize};

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Alert categories surfaced to the UI.
///
/// The fusion rules fold the blink-rate and head-movement signals into the
/// `Fatigue` and `Distraction` kinds respectively; `AbnormalBlink` and
/// `ExcessiveMovement` exist for UI surfaces that classify on the raw
/// snapshot flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Fatigue,
    Distraction,
    Phone,
    DriverAbsent,
    Yawn,
    AbnormalBlink,
    ExcessiveMovement,
}

impl AlertKind {
    /// Stable identifier used in logs and serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Fatigue => "fatigue",
            AlertKind::Distraction => "distraction",
            AlertKind::Phone => "phone",
            AlertKind::DriverAbsent => "driver_absent",
            AlertKind::Yawn => "yawn",
            AlertKind::AbnormalBlink => "abnormal_blink",
            AlertKind::ExcessiveMovement => "excessive_movement",
        }
    }
}

/// One candidate alert produced by the fusion engine for the current frame.
///
/// Ephemeral: the dispatcher decides whether it reaches a renderer, nothing
/// persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub severity: Severity,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            kind,
            message: message.into(),
            severity,
        }
    }
}
