//! Statistics over historical jump records and training targets.
//!
//! Storage of records is the caller's concern; these helpers only do the
//! math the numbers need.

use jumpgauge_pose_model::JumpRecord;

/// Inches per meter, as reported to users.
pub const INCHES_PER_METER: f64 = 39.37;

/// Rim height plus ball clearance needed to dunk, in inches.
pub const DUNK_TARGET_IN: f64 = 125.0;

/// Rule-of-thumb standing reach above standing height, in inches.
pub const STANDING_REACH_OFFSET_IN: f64 = 14.0;

/// Summary of a set of jump records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpStats {
    /// Highest recorded jump, meters.
    pub best_m: f64,

    /// Mean recorded jump, meters.
    pub mean_m: f64,

    /// Number of records summarized.
    pub count: usize,
}

/// Summarize jump records; `None` for an empty history.
///
/// An empty history is reported as absent rather than as zeros, so a
/// display layer never confuses "no jumps yet" with "jumped zero meters".
pub fn summarize(records: &[JumpRecord]) -> Option<JumpStats> {
    if records.is_empty() {
        return None;
    }

    let best_m = records
        .iter()
        .map(|r| r.height_m)
        .fold(f64::NEG_INFINITY, f64::max);
    let sum: f64 = records.iter().map(|r| r.height_m).sum();

    Some(JumpStats {
        best_m,
        mean_m: sum / records.len() as f64,
        count: records.len(),
    })
}

pub fn meters_to_inches(meters: f64) -> f64 {
    meters * INCHES_PER_METER
}

pub fn inches_to_meters(inches: f64) -> f64 {
    inches / INCHES_PER_METER
}

/// Vertical jump required to dunk for a given standing height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DunkTarget {
    /// Estimated standing reach, inches.
    pub standing_reach_in: f64,

    /// Vertical needed to reach the dunk target, inches. Negative means the
    /// reach already clears the target.
    pub needed_vertical_in: f64,
}

/// Estimate the vertical jump needed to dunk from standing height in inches.
pub fn vertical_needed_to_dunk(standing_height_in: f64) -> DunkTarget {
    let standing_reach_in = (standing_height_in + STANDING_REACH_OFFSET_IN).round();
    DunkTarget {
        standing_reach_in,
        needed_vertical_in: DUNK_TARGET_IN - standing_reach_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(height_m: f64) -> JumpRecord {
        JumpRecord::new(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(), height_m)
    }

    #[test]
    fn test_empty_history_is_none() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn test_best_and_mean() {
        let records = vec![record(0.40), record(0.55), record(0.46)];
        let stats = summarize(&records).unwrap();
        assert_eq!(stats.count, 3);
        assert!((stats.best_m - 0.55).abs() < 1e-9);
        assert!((stats.mean_m - 0.47).abs() < 1e-9);
    }

    #[test]
    fn test_single_record() {
        let stats = summarize(&[record(0.3)]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.best_m, stats.mean_m);
    }

    #[test]
    fn test_unit_conversions_invert() {
        let m = 0.62;
        assert!((inches_to_meters(meters_to_inches(m)) - m).abs() < 1e-12);
        assert!((meters_to_inches(1.0) - 39.37).abs() < 1e-12);
    }

    #[test]
    fn test_dunk_target_for_six_footer() {
        let target = vertical_needed_to_dunk(72.0);
        assert!((target.standing_reach_in - 86.0).abs() < 1e-9);
        assert!((target.needed_vertical_in - 39.0).abs() < 1e-9);
    }

    #[test]
    fn test_tall_player_may_need_nothing() {
        let target = vertical_needed_to_dunk(112.0);
        assert!(target.needed_vertical_in <= 0.0);
    }
}
