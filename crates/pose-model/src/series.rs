//! The accumulated COM series for one analysis session.

use serde::{Deserialize, Serialize};

/// One accepted vertical body-center estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComSample {
    /// Index of the source video frame the estimate came from.
    pub frame_index: u64,

    /// Vertical position in absolute pixels. Larger y = lower in the image.
    pub y_px: f64,
}

impl ComSample {
    pub fn new(frame_index: u64, y_px: f64) -> Self {
        Self { frame_index, y_px }
    }
}

/// How dropped frames are handled when the series is handed to timing math.
///
/// Frames without a confident estimate are never stored, so sample position
/// does not correspond 1:1 to original frame number. Timing math divides an
/// index distance by the capture frame rate, which makes the choice here a
/// timing question, not a cosmetic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapStrategy {
    /// Hand over the samples as stored. Index distance shrinks by the drop
    /// rate, understating flight time proportionally.
    #[default]
    Contiguous,

    /// Linearly interpolate one value per original frame index across gaps,
    /// so index distance matches capture time again.
    TimeFill,
}

/// Ordered COM samples for one session, in chronological capture order.
///
/// Invariant: `frame_index` is strictly increasing. The session controller
/// is the sole writer; pushing an out-of-order sample is a programming
/// error upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComSeries {
    samples: Vec<ComSample>,
}

impl ComSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample. Must arrive in strictly increasing frame order.
    pub fn push(&mut self, sample: ComSample) {
        if let Some(last) = self.samples.last() {
            debug_assert!(
                sample.frame_index > last.frame_index,
                "COM samples must arrive in strictly increasing frame order \
                 (got frame {} after frame {})",
                sample.frame_index,
                last.frame_index
            );
        }
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[ComSample] {
        &self.samples
    }

    /// The raw pixel values in arrival order.
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.y_px).collect()
    }

    /// Frame indices spanned, inclusive, or `None` when empty.
    pub fn frame_span(&self) -> Option<(u64, u64)> {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => Some((first.frame_index, last.frame_index)),
            _ => None,
        }
    }

    /// Count of original frames inside the span that produced no sample.
    pub fn dropped_frames(&self) -> u64 {
        match self.frame_span() {
            Some((first, last)) => (last - first + 1) - self.samples.len() as u64,
            None => 0,
        }
    }

    /// The value sequence handed to the calculator, per the gap strategy.
    ///
    /// `Contiguous` returns the stored values untouched. `TimeFill` expands
    /// the series to one value per original frame index, filling gaps by
    /// linear interpolation between the neighboring samples.
    pub fn resampled(&self, strategy: GapStrategy) -> Vec<f64> {
        match strategy {
            GapStrategy::Contiguous => self.values(),
            GapStrategy::TimeFill => self.time_filled(),
        }
    }

    fn time_filled(&self) -> Vec<f64> {
        if self.samples.len() < 2 {
            return self.values();
        }

        let mut filled = Vec::with_capacity(self.samples.len());
        filled.push(self.samples[0].y_px);

        for pair in self.samples.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let gap = b.frame_index - a.frame_index;
            for step in 1..=gap {
                let t = step as f64 / gap as f64;
                filled.push(a.y_px + (b.y_px - a.y_px) * t);
            }
        }

        filled
    }
}

impl FromIterator<ComSample> for ComSeries {
    fn from_iter<I: IntoIterator<Item = ComSample>>(iter: I) -> Self {
        let mut series = ComSeries::new();
        for sample in iter {
            series.push(sample);
        }
        series
    }
}
