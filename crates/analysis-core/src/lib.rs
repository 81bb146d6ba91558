//! JumpGauge Analysis Core
//!
//! Turns a per-frame series of vertical body-center positions into a jump
//! height via flight-time physics:
//! - **COM estimation:** Median of confident major-joint keypoints
//! - **Smoothing:** Fixed-window moving average to suppress detection jitter
//! - **Phase detection:** Deepest squat, then takeoff/landing by threshold crossing
//! - **Kinematics:** Flight duration to apex height, `h = g·t²/8`
//!
//! This crate is pure computation — no I/O, no detector or codec
//! dependencies. All inputs are data; all outputs are data.

pub mod com;
pub mod flight;
pub mod smooth;
pub mod stats;

pub use com::{estimate_com, ComConfig, ComEstimator};
pub use flight::{compute_height, FlightAnalyzer, FlightConfig, PhaseAnalysis, GRAVITY_MPS2};
pub use smooth::moving_average;
