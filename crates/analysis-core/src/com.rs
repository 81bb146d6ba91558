//! Center-of-mass estimation from major-joint keypoints.
//!
//! One pose frame in, one vertical pixel coordinate out. The estimate is
//! the median of the confident canonical keypoints, which shrugs off a
//! single badly-placed limb in a way a mean cannot.

use jumpgauge_pose_model::{Landmark, PoseFrame};

/// Configuration for COM estimation.
#[derive(Debug, Clone, Copy)]
pub struct ComConfig {
    /// Minimum keypoint visibility for a landmark to count (exclusive).
    pub visibility_threshold: f64,

    /// Minimum surviving canonical landmarks required for an estimate.
    pub min_visible: usize,
}

impl Default for ComConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.7,
            min_visible: 4,
        }
    }
}

/// The center-of-mass estimator.
pub struct ComEstimator {
    config: ComConfig,
}

impl ComEstimator {
    /// Create an estimator with the given configuration.
    pub fn new(config: ComConfig) -> Self {
        Self { config }
    }

    /// Create an estimator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ComConfig::default())
    }

    /// Estimate the vertical body-center position for one frame, in pixels.
    ///
    /// Returns `None` when fewer than `min_visible` of the canonical
    /// landmarks pass the visibility threshold. Pure and deterministic;
    /// the result does not depend on keypoint iteration order.
    pub fn estimate(&self, frame: &PoseFrame, image_height_px: u32) -> Option<f64> {
        let mut visible: Vec<f64> = Landmark::COM_SET
            .iter()
            .filter_map(|&landmark| frame.get(landmark))
            .filter(|kp| kp.is_visible(self.config.visibility_threshold))
            .map(|kp| kp.to_pixel_y(image_height_px))
            .collect();

        if visible.len() < self.config.min_visible {
            return None;
        }

        Some(median(&mut visible))
    }
}

/// Estimate the COM for one frame using default configuration.
pub fn estimate_com(frame: &PoseFrame, image_height_px: u32) -> Option<f64> {
    ComEstimator::with_defaults().estimate(frame, image_height_px)
}

/// Median of a non-empty slice; averages the middle pair for even counts.
fn median(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}
