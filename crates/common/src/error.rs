//! Error types shared across JumpGauge crates.
//!
//! These cover upstream collaborator failures only. Degenerate analysis
//! inputs (too few samples, no detectable takeoff) are not errors; they
//! resolve to an undetermined outcome in the model types.

/// Top-level error type for JumpGauge operations.
#[derive(Debug, thiserror::Error)]
pub enum JumpgaugeError {
    #[error("Frame source error: {message}")]
    FrameSource { message: String },

    #[error("Pose source error: {message}")]
    PoseSource { message: String },

    #[error("Session error: {message}")]
    Session { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using JumpgaugeError.
pub type JumpgaugeResult<T> = Result<T, JumpgaugeError>;

impl JumpgaugeError {
    pub fn frame_source(msg: impl Into<String>) -> Self {
        Self::FrameSource {
            message: msg.into(),
        }
    }

    pub fn pose_source(msg: impl Into<String>) -> Self {
        Self::PoseSource {
            message: msg.into(),
        }
    }

    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
