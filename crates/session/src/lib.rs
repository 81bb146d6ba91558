//! JumpGauge Session Controller
//!
//! Drives one analysis session over a finite video:
//!
//! ```text
//! frames ──▶ pose source ──▶ COM estimator ──▶ COM series ──▶ flight analyzer
//!   (per frame, in capture order)                  (once, after exhaustion)
//! ```
//!
//! The frame and pose sources are capability interfaces, so the controller
//! runs identically against a real decoder/detector pair or against the
//! deterministic synthetic sources in [`synthetic`].

pub mod session;
pub mod sources;
pub mod synthetic;

pub use session::{run_session, JumpSession, SessionConfig, SessionState};
pub use sources::{FrameSource, PoseSource, VideoFrame};
