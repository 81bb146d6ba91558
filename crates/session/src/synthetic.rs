//! Deterministic synthetic sources.
//!
//! Replays scripted frames and poses so the session controller can be
//! exercised without any real video or pose model. Scripts are plain data;
//! the same script always produces the same outcome.

use jumpgauge_common::JumpgaugeResult;
use jumpgauge_pose_model::{Landmark, PoseFrame};

use crate::sources::{FrameSource, PoseSource, VideoFrame};

/// A frame source producing `count` frames of fixed dimensions, indexed
/// from zero.
#[derive(Debug, Clone)]
pub struct ScriptedFrameSource {
    next: u64,
    count: u64,
    width_px: u32,
    height_px: u32,
}

impl ScriptedFrameSource {
    pub fn new(count: u64, width_px: u32, height_px: u32) -> Self {
        Self {
            next: 0,
            count,
            width_px,
            height_px,
        }
    }
}

impl FrameSource for ScriptedFrameSource {
    fn next_frame(&mut self) -> JumpgaugeResult<Option<VideoFrame>> {
        if self.next >= self.count {
            return Ok(None);
        }
        let frame = VideoFrame::new(self.next, self.width_px, self.height_px);
        self.next += 1;
        Ok(Some(frame))
    }
}

/// A pose source replaying one optional observation per frame index.
///
/// `None` entries model frames where no person was detected; indices past
/// the end of the script also detect nothing.
#[derive(Debug, Clone)]
pub struct ScriptedPoseSource {
    script: Vec<Option<PoseFrame>>,
}

impl ScriptedPoseSource {
    pub fn new(script: Vec<Option<PoseFrame>>) -> Self {
        Self { script }
    }

    /// Build a script from a vertical pixel trajectory: each entry places
    /// all six canonical COM landmarks at that pixel height with high
    /// visibility, so the COM estimate reproduces the trajectory exactly.
    pub fn from_trajectory(y_px: &[Option<f64>], image_height_px: u32) -> Self {
        let script = y_px
            .iter()
            .enumerate()
            .map(|(index, y)| {
                y.map(|y_px| {
                    let mut frame = PoseFrame::new(index as u64);
                    for landmark in Landmark::COM_SET {
                        frame =
                            frame.with_keypoint(landmark, y_px / image_height_px as f64, 0.95);
                    }
                    frame
                })
            })
            .collect();
        Self { script }
    }
}

impl PoseSource for ScriptedPoseSource {
    fn detect(&mut self, frame: &VideoFrame) -> JumpgaugeResult<Option<PoseFrame>> {
        Ok(self
            .script
            .get(frame.index as usize)
            .cloned()
            .flatten())
    }
}

/// The reference jump trajectory used across the workspace's tests:
/// 200 samples at 60 fps — squat from y=300 down to y=340 over 30 frames,
/// drive up to y=200 over 10 frames, hold through flight for 40 frames,
/// then settle at y=320.
pub fn jump_trajectory_px() -> Vec<f64> {
    let mut s = Vec::with_capacity(200);
    for i in 0..30 {
        s.push(300.0 + 40.0 * i as f64 / 29.0);
    }
    for i in 0..10 {
        s.push(340.0 - 140.0 * (i + 1) as f64 / 10.0);
    }
    s.extend(std::iter::repeat(200.0).take(40));
    while s.len() < 200 {
        s.push(320.0);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_source_is_finite_and_ordered() {
        let mut source = ScriptedFrameSource::new(3, 640, 480);
        let mut indices = Vec::new();
        while let Some(frame) = source.next_frame().unwrap() {
            assert_eq!(frame.height_px, 480);
            indices.push(frame.index);
        }
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_trajectory_script_reproduces_pixel_values() {
        let script = ScriptedPoseSource::from_trajectory(&[Some(240.0), None], 480);
        let mut poses = script;

        let frame0 = VideoFrame::new(0, 640, 480);
        let pose = poses.detect(&frame0).unwrap().unwrap();
        let com = jumpgauge_analysis_core::estimate_com(&pose, 480).unwrap();
        assert!((com - 240.0).abs() < 1e-9);

        let frame1 = VideoFrame::new(1, 640, 480);
        assert!(poses.detect(&frame1).unwrap().is_none());
    }

    #[test]
    fn test_out_of_script_frames_detect_nothing() {
        let mut poses = ScriptedPoseSource::new(vec![]);
        let frame = VideoFrame::new(99, 640, 480);
        assert!(poses.detect(&frame).unwrap().is_none());
    }

    #[test]
    fn test_reference_trajectory_shape() {
        let s = jump_trajectory_px();
        assert_eq!(s.len(), 200);
        assert_eq!(s[0], 300.0);
        assert_eq!(s[29], 340.0);
        assert_eq!(s[40], 200.0);
        assert_eq!(s[199], 320.0);
    }
}
