//! Per-frame pose observations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::landmark::Landmark;

/// A single detected keypoint.
///
/// Only the vertical coordinate matters to jump analysis, so the horizontal
/// coordinate is not carried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    /// Vertical position as a fraction of frame height, `0.0` at the top.
    pub y: f64,

    /// Detector confidence that the landmark is where it says, in `[0.0, 1.0]`.
    pub visibility: f64,
}

impl Keypoint {
    pub fn new(y: f64, visibility: f64) -> Self {
        Self { y, visibility }
    }

    /// Whether the detector is confident enough for this keypoint to count.
    pub fn is_visible(&self, threshold: f64) -> bool {
        self.visibility > threshold
    }

    /// Absolute pixel y for a frame of the given height.
    pub fn to_pixel_y(&self, image_height_px: u32) -> f64 {
        self.y * image_height_px as f64
    }
}

/// One frame's worth of detected landmarks.
///
/// Produced by a pose source for frames where a person was detected; frames
/// without a detection yield no `PoseFrame` at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Index of the source video frame this observation came from.
    pub frame_index: u64,

    /// Detected landmarks. Landmarks the detector did not report are absent.
    pub keypoints: HashMap<Landmark, Keypoint>,
}

impl PoseFrame {
    /// Create an empty observation for a frame.
    pub fn new(frame_index: u64) -> Self {
        Self {
            frame_index,
            keypoints: HashMap::new(),
        }
    }

    /// Builder-style insertion, handy for constructing test frames.
    pub fn with_keypoint(mut self, landmark: Landmark, y: f64, visibility: f64) -> Self {
        self.keypoints.insert(landmark, Keypoint::new(y, visibility));
        self
    }

    pub fn insert(&mut self, landmark: Landmark, keypoint: Keypoint) {
        self.keypoints.insert(landmark, keypoint);
    }

    pub fn get(&self, landmark: Landmark) -> Option<&Keypoint> {
        self.keypoints.get(&landmark)
    }

    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    /// Average visibility across all reported keypoints.
    pub fn average_visibility(&self) -> f64 {
        if self.keypoints.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.keypoints.values().map(|k| k.visibility).sum();
        sum / self.keypoints.len() as f64
    }
}
