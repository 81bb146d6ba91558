//! Flight-time phase detection and jump kinematics.
//!
//! # Algorithm
//!
//! 1. **Smooth** the COM series with a centered moving average (valid-only,
//!    so the output is `window - 1` samples shorter).
//! 2. **Deepest squat:** the maximum smoothed value in the first half of
//!    the series (pixel y grows downward, so the maximum is the lowest
//!    physical point of the counter-movement).
//! 3. **Takeoff:** scanning forward from the squat, the first sample below
//!    95% of the squat value.
//! 4. **Landing:** skipping a few samples past takeoff to clear the rising
//!    edge, the first sample back at or above that threshold.
//! 5. **Kinematics:** symmetric projectile motion gives the apex height
//!    from total flight time: `h = g·t²/8`.
//!
//! Every degenerate input resolves to an undetermined outcome; this module
//! never panics or errors on series content.

use jumpgauge_common::timing::FrameTiming;
use jumpgauge_pose_model::{JumpOutcome, UndeterminedReason};

use crate::smooth::moving_average;

/// Standard gravity, m/s².
pub const GRAVITY_MPS2: f64 = 9.81;

/// Configuration for flight-time measurement.
#[derive(Debug, Clone, Copy)]
pub struct FlightConfig {
    /// Moving-average window applied before phase detection (samples).
    pub smoothing_window: usize,

    /// Minimum series length worth analyzing.
    pub min_samples: usize,

    /// Frame rates at or below this are rejected (frames/sec).
    pub min_fps: f64,

    /// Takeoff threshold as a fraction of the deepest-squat value.
    pub takeoff_ratio: f64,

    /// Samples to skip after takeoff before looking for the landing, so the
    /// search cannot re-trigger on the same rising edge.
    pub landing_skip: usize,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            smoothing_window: 7,
            min_samples: 15,
            min_fps: 5.0,
            takeoff_ratio: 0.95,
            landing_skip: 5,
        }
    }
}

/// Diagnostic detail for a successful measurement.
///
/// All indices refer to the smoothed series, not the raw input.
#[derive(Debug, Clone, Copy)]
pub struct PhaseAnalysis {
    /// Index of the deepest-squat sample.
    pub lowest_idx: usize,

    /// Smoothed value at the deepest squat (pixels).
    pub lowest_y_px: f64,

    /// Takeoff/landing threshold (pixels).
    pub threshold_y_px: f64,

    /// First sample past the takeoff threshold after the squat.
    pub takeoff_idx: usize,

    /// First sample back at or below the takeoff level after the flight.
    pub landing_idx: usize,

    /// Airborne duration in seconds.
    pub flight_secs: f64,
}

/// The flight-time analyzer.
pub struct FlightAnalyzer {
    config: FlightConfig,
}

impl FlightAnalyzer {
    /// Create an analyzer with the given configuration.
    pub fn new(config: FlightConfig) -> Self {
        Self { config }
    }

    /// Create an analyzer with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(FlightConfig::default())
    }

    /// Measure the jump height for a COM series, in meters.
    pub fn measure(&self, series: &[f64], fps: f64) -> JumpOutcome {
        self.measure_with_phases(series, fps).0
    }

    /// Measure the jump height and return phase diagnostics on success.
    pub fn measure_with_phases(
        &self,
        series: &[f64],
        fps: f64,
    ) -> (JumpOutcome, Option<PhaseAnalysis>) {
        if series.len() < self.config.min_samples {
            tracing::debug!(
                samples = series.len(),
                required = self.config.min_samples,
                "Series too short to analyze"
            );
            return (
                JumpOutcome::undetermined(UndeterminedReason::InsufficientData),
                None,
            );
        }

        let timing = FrameTiming::new(fps);
        if !timing.is_reliable(self.config.min_fps) {
            tracing::debug!(fps, min_fps = self.config.min_fps, "Frame rate unusable");
            return (
                JumpOutcome::undetermined(UndeterminedReason::InvalidFrameRate),
                None,
            );
        }

        let smoothed = moving_average(series, self.config.smoothing_window);
        if smoothed.len() < 2 {
            return (
                JumpOutcome::undetermined(UndeterminedReason::InsufficientData),
                None,
            );
        }

        // Deepest squat: the counter-movement bottoms out in the first half.
        let half = smoothed.len() / 2;
        let (lowest_idx, lowest_y_px) = smoothed[..half]
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, &v)| {
                if v > best.1 {
                    (i, v)
                } else {
                    best
                }
            });

        let threshold_y_px = lowest_y_px * self.config.takeoff_ratio;

        let Some(takeoff_idx) =
            (lowest_idx..smoothed.len()).find(|&i| smoothed[i] < threshold_y_px)
        else {
            tracing::debug!(lowest_idx, threshold_y_px, "No takeoff crossing found");
            return (
                JumpOutcome::undetermined(UndeterminedReason::NoTakeoff),
                None,
            );
        };

        let Some(landing_idx) = (takeoff_idx + self.config.landing_skip..smoothed.len())
            .find(|&i| smoothed[i] >= threshold_y_px)
        else {
            tracing::debug!(takeoff_idx, threshold_y_px, "No landing crossing found");
            return (
                JumpOutcome::undetermined(UndeterminedReason::NoLanding),
                None,
            );
        };

        let flight_secs = timing.span_secs(landing_idx - takeoff_idx);
        let height_m = GRAVITY_MPS2 * flight_secs * flight_secs / 8.0;

        tracing::debug!(
            lowest_idx,
            takeoff_idx,
            landing_idx,
            flight_secs,
            height_m,
            "Flight phases detected"
        );

        (
            JumpOutcome::measured(height_m),
            Some(PhaseAnalysis {
                lowest_idx,
                lowest_y_px,
                threshold_y_px,
                takeoff_idx,
                landing_idx,
                flight_secs,
            }),
        )
    }
}

/// Measure a jump height using default configuration.
pub fn compute_height(series: &[f64], fps: f64) -> JumpOutcome {
    FlightAnalyzer::with_defaults().measure(series, fps)
}
