use std::sync::Arc;
use std::time::Duration;

use crate::bitmap::Bitmap;
use crate::error::ResourceError;

// ── Animation ───────────────────────────────────────────────────────────────

/// One frame of an animation: a shared bitmap shown for a fixed duration.
#[derive(Clone, Debug)]
pub struct Frame {
    pub bitmap: Arc<Bitmap>,
    pub duration: Duration,
}

/// A finite, ordered frame sequence. Built once at prototype-construction
/// time and never mutated afterwards; playback (mapping wall-clock time to a
/// frame) is a pure read.
#[derive(Clone, Debug, Default)]
pub struct Animation {
    frames: Vec<Frame>,
    total: Duration,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame. Frame order is append order; `duration` must be
    /// strictly positive.
    pub fn add_frame(
        &mut self,
        bitmap: Arc<Bitmap>,
        duration: Duration,
    ) -> Result<(), ResourceError> {
        if duration.is_zero() {
            return Err(ResourceError::MalformedFrame { duration });
        }
        self.total += duration;
        self.frames.push(Frame { bitmap, duration });
        Ok(())
    }

    pub fn frames(&self) -> &[Frame] {
        self.frames.as_slice()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sum of all per-frame durations.
    pub fn total_duration(&self) -> Duration {
        self.total
    }

    /// The frame visible `elapsed` after the loop started. Time wraps over
    /// the total duration, so any elapsed value maps to a frame. `None` only
    /// for an empty animation.
    pub fn frame_at(&self, elapsed: Duration) -> Option<&Frame> {
        if self.frames.is_empty() {
            return None;
        }
        // The remainder is < total, which always fits u64 nanoseconds.
        let mut t = Duration::from_nanos((elapsed.as_nanos() % self.total.as_nanos()) as u64);
        for frame in &self.frames {
            if t < frame.duration {
                return Some(frame);
            }
            t -= frame.duration;
        }
        self.frames.last()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
