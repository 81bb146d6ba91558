//! Jump measurement outcomes and historical records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a session or calculation could not produce a height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndeterminedReason {
    /// Too few valid COM samples were collected.
    InsufficientData,

    /// The reported frame rate is too low to time a flight.
    InvalidFrameRate,

    /// The smoothed series never crossed the takeoff threshold.
    NoTakeoff,

    /// The series never returned to the takeoff level after leaving it.
    NoLanding,
}

impl UndeterminedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            UndeterminedReason::InsufficientData => "insufficient data",
            UndeterminedReason::InvalidFrameRate => "invalid frame rate",
            UndeterminedReason::NoTakeoff => "no takeoff detected",
            UndeterminedReason::NoLanding => "no landing detected",
        }
    }
}

/// The result of one jump analysis.
///
/// A genuinely tiny jump measures as a small height; a failed analysis is
/// `Undetermined`. The two are never collapsed into a bare zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JumpOutcome {
    /// A successfully measured jump height in meters, always `>= 0`.
    Measured { height_m: f64 },

    /// Analysis completed but no height could be determined.
    Undetermined { reason: UndeterminedReason },
}

impl JumpOutcome {
    pub fn measured(height_m: f64) -> Self {
        Self::Measured { height_m }
    }

    pub fn undetermined(reason: UndeterminedReason) -> Self {
        Self::Undetermined { reason }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, Self::Measured { .. })
    }

    /// The measured height, if any.
    pub fn height_m(&self) -> Option<f64> {
        match self {
            Self::Measured { height_m } => Some(*height_m),
            Self::Undetermined { .. } => None,
        }
    }
}

/// One historical jump result, as a caller would retain it.
///
/// Storage of these records is the caller's concern; this is only the
/// in-memory shape consumed by the statistics helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpRecord {
    /// When the jump was measured.
    pub recorded_at: DateTime<Utc>,

    /// Measured height in meters.
    pub height_m: f64,
}

impl JumpRecord {
    pub fn new(recorded_at: DateTime<Utc>, height_m: f64) -> Self {
        Self {
            recorded_at,
            height_m,
        }
    }

    /// A record stamped with the current time.
    pub fn now(height_m: f64) -> Self {
        Self::new(Utc::now(), height_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_and_undetermined_stay_distinct() {
        let zero = JumpOutcome::measured(0.0);
        assert!(zero.is_measured());
        assert_eq!(zero.height_m(), Some(0.0));

        let failed = JumpOutcome::undetermined(UndeterminedReason::NoTakeoff);
        assert!(!failed.is_measured());
        assert_eq!(failed.height_m(), None);
        assert_ne!(zero, failed);
    }

    #[test]
    fn test_outcome_serialization_tags_status() {
        let json = serde_json::to_string(&JumpOutcome::measured(0.42)).unwrap();
        assert!(json.contains("\"status\":\"measured\""));
        assert!(json.contains("\"height_m\":0.42"));

        let json =
            serde_json::to_string(&JumpOutcome::undetermined(UndeterminedReason::NoLanding))
                .unwrap();
        assert!(json.contains("\"status\":\"undetermined\""));
        assert!(json.contains("\"no_landing\""));
    }

    #[test]
    fn test_record_roundtrip() {
        let record = JumpRecord::now(0.55);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: JumpRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
