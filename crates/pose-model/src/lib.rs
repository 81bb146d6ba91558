//! JumpGauge Pose Model
//!
//! Defines the core data contracts for jump analysis:
//! - **Landmarks:** Named anatomical keypoints with visibility scores
//! - **Pose frames:** One detector observation per video frame
//! - **COM series:** Accumulated vertical body-center samples for a session
//! - **Outcomes:** Measured jump heights and explicit undetermined markers
//!
//! Keypoint vertical positions are normalized to `[0.0, 1.0]` relative to
//! the frame height; accepted COM samples are absolute pixel coordinates
//! with the image convention that y grows downward.

pub mod frame;
pub mod landmark;
pub mod measurement;
pub mod series;

pub use frame::*;
pub use landmark::*;
pub use measurement::*;
pub use series::*;
