//! Single-shot jump analysis sessions.

use jumpgauge_analysis_core::com::{ComConfig, ComEstimator};
use jumpgauge_analysis_core::flight::{FlightAnalyzer, FlightConfig};
use jumpgauge_common::config::AppConfig;
use jumpgauge_common::error::{JumpgaugeError, JumpgaugeResult};
use jumpgauge_pose_model::{ComSample, ComSeries, GapStrategy, JumpOutcome, UndeterminedReason};

use crate::sources::{FrameSource, PoseSource};

/// Configuration for a jump analysis session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Minimum valid samples the session must collect before it is worth
    /// invoking the calculator at all. Coarser than the calculator's own
    /// series-length gate.
    pub min_samples: usize,

    /// How dropped frames are handled before timing math.
    pub gap_strategy: GapStrategy,

    /// COM estimation settings.
    pub com: ComConfig,

    /// Flight measurement settings.
    pub flight: FlightConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_samples: 10,
            gap_strategy: GapStrategy::default(),
            com: ComConfig::default(),
            flight: FlightConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Build a session configuration from application defaults.
    pub fn from_app_config(config: &AppConfig) -> Self {
        let defaults = &config.analysis;
        Self {
            min_samples: defaults.min_session_samples,
            gap_strategy: if defaults.time_fill_gaps {
                GapStrategy::TimeFill
            } else {
                GapStrategy::Contiguous
            },
            com: ComConfig {
                visibility_threshold: defaults.visibility_threshold,
                ..ComConfig::default()
            },
            flight: FlightConfig {
                smoothing_window: defaults.smoothing_window,
                ..FlightConfig::default()
            },
        }
    }
}

/// State of an analysis session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Session created, no usable estimate yet.
    Idle,

    /// At least one COM sample collected.
    Collecting,

    /// Frame source exhausted, calculator running.
    Computing,

    /// Finished. The outcome was handed to the caller; sessions are
    /// single-shot and cannot be rerun.
    Done,
}

/// One analysis session: one video, one COM series, one compute step.
pub struct JumpSession {
    config: SessionConfig,
    estimator: ComEstimator,
    state: SessionState,
    series: ComSeries,
}

impl JumpSession {
    /// Create a session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            estimator: ComEstimator::new(config.com),
            state: SessionState::Idle,
            series: ComSeries::new(),
        }
    }

    /// Create a session with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SessionConfig::default())
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Valid COM samples collected so far.
    pub fn samples_collected(&self) -> usize {
        self.series.len()
    }

    /// Drive the full session: collect every frame, then compute once.
    ///
    /// Frames are consumed until the source is exhausted; each frame with a
    /// detected pose and a confident COM estimate appends one sample, in
    /// strict capture order. Source errors propagate to the caller
    /// immediately. Degenerate collected data never errors; it resolves to
    /// an undetermined outcome.
    pub fn run(
        &mut self,
        frames: &mut dyn FrameSource,
        poses: &mut dyn PoseSource,
        fps: f64,
    ) -> JumpgaugeResult<JumpOutcome> {
        if self.state != SessionState::Idle {
            return Err(JumpgaugeError::session(
                "Session already consumed; create a new one per video",
            ));
        }

        tracing::info!(fps, "Starting jump analysis session");

        let mut frames_seen: u64 = 0;
        while let Some(frame) = frames.next_frame()? {
            frames_seen += 1;

            let Some(pose) = poses.detect(&frame)? else {
                continue;
            };

            if let Some(y_px) = self.estimator.estimate(&pose, frame.height_px) {
                self.state = SessionState::Collecting;
                self.series.push(ComSample::new(frame.index, y_px));
            }
        }

        tracing::info!(
            frames_seen,
            samples = self.series.len(),
            dropped = self.series.dropped_frames(),
            "Collection finished"
        );

        self.state = SessionState::Computing;

        if self.series.len() < self.config.min_samples {
            tracing::warn!(
                samples = self.series.len(),
                required = self.config.min_samples,
                "Too few valid samples for this session"
            );
            self.state = SessionState::Done;
            return Ok(JumpOutcome::undetermined(
                UndeterminedReason::InsufficientData,
            ));
        }

        let values = self.series.resampled(self.config.gap_strategy);
        let outcome = FlightAnalyzer::new(self.config.flight).measure(&values, fps);
        self.state = SessionState::Done;

        match outcome {
            JumpOutcome::Measured { height_m } => {
                tracing::info!(height_m, "Jump measured");
            }
            JumpOutcome::Undetermined { reason } => {
                tracing::warn!(reason = reason.as_str(), "Jump undetermined");
            }
        }

        Ok(outcome)
    }
}

/// Run a single session with default configuration.
pub fn run_session(
    frames: &mut dyn FrameSource,
    poses: &mut dyn PoseSource,
    fps: f64,
) -> JumpgaugeResult<JumpOutcome> {
    JumpSession::with_defaults().run(frames, poses, fps)
}
