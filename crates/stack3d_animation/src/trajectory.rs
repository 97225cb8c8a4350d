//! Time-windowed scalar interpolation
//!
//! A [`Trajectory`] maps a time coordinate to a value between two endpoints
//! over a fixed window. Sampling clamps at both ends, so frame times that land
//! past the window never overshoot. A trajectory can be retargeted while in
//! flight: the new segment starts from the most recently sampled point, which
//! keeps the value continuous across the splice.

/// Linear transition from `start_value` to `end_value` over
/// `[start_time, end_time]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Trajectory {
    start_time: f32,
    end_time: f32,
    start_value: f32,
    end_value: f32,
    /// Time passed to the most recent `sample` call
    last_sample_time: Option<f32>,
}

impl Trajectory {
    pub fn new(start_time: f32, end_time: f32, start_value: f32, end_value: f32) -> Self {
        if end_time < start_time {
            tracing::debug!(start_time, end_time, "trajectory window is inverted");
        }

        Self {
            start_time,
            end_time,
            start_value,
            end_value,
            last_sample_time: None,
        }
    }

    /// A trajectory that has settled at `value` for every time, including
    /// negative ones
    pub fn constant(value: f32) -> Self {
        Self::new(f32::NEG_INFINITY, f32::NEG_INFINITY, value, value)
    }

    /// Sample the trajectory and remember `time` as the splice point for the
    /// next [`retarget`](Self::retarget)
    pub fn sample(&mut self, time: f32) -> f32 {
        self.last_sample_time = Some(time);
        self.value_at(time)
    }

    /// Value at `time` without touching the recorded sample time
    pub fn value_at(&self, time: f32) -> f32 {
        let t = self.progress(time);
        self.start_value + t * (self.end_value - self.start_value)
    }

    /// Normalized position of `time` inside the window, clamped to `[0, 1]`
    ///
    /// Zero-length and inverted windows have no interior: anything before
    /// `start_time` is 0 and everything else is 1.
    pub fn progress(&self, time: f32) -> f32 {
        let duration = self.end_time - self.start_time;
        // NaN for a window pinned at -inf
        if duration.is_nan() || duration <= 0.0 {
            return if time < self.start_time { 0.0 } else { 1.0 };
        }

        ((time - self.start_time) / duration).clamp(0.0, 1.0)
    }

    /// Redirect toward a new end point
    ///
    /// The new segment starts at the last sampled time and value. If nothing
    /// has been sampled yet, the current start of the window is used, or
    /// `end_time` when that start is not finite.
    pub fn retarget(&mut self, end_time: f32, end_value: f32) {
        let splice_time = match self.last_sample_time {
            Some(time) => time,
            None if self.start_time.is_finite() => self.start_time,
            None => end_time,
        };
        let splice_value = self.value_at(splice_time);

        if end_time < splice_time {
            tracing::debug!(
                splice_time,
                end_time,
                "retargeted trajectory ends before its splice point"
            );
        }

        self.start_time = splice_time;
        self.start_value = splice_value;
        self.end_time = end_time;
        self.end_value = end_value;
    }

    /// True once `time` has reached the end of the window
    pub fn is_settled(&self, time: f32) -> bool {
        self.progress(time) >= 1.0
    }

    pub fn start_time(&self) -> f32 {
        self.start_time
    }

    pub fn end_time(&self) -> f32 {
        self.end_time
    }

    pub fn start_value(&self) -> f32 {
        self.start_value
    }

    pub fn end_value(&self) -> f32 {
        self.end_value
    }

    pub fn last_sample_time(&self) -> Option<f32> {
        self.last_sample_time
    }
}
