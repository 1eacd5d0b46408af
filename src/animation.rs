//! Progressive reveal of a freshly laid out chart.
//!
//! The host owns the clock. When [`RevealAnimation::on_redraw`] asks for a
//! reveal, the host runs an animation of the returned duration and feeds its
//! normalized progress back through [`RevealAnimation::tick`].

use std::time::Duration;

use tracing::{debug, trace};

/// Reveal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    /// No reveal in progress.
    #[default]
    Idle,
    /// A reveal is being driven by the host clock.
    Running {
        /// Duration the reveal was started with.
        duration: Duration,
    },
}

/// How many retained points are visible, and whether a reveal is running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealAnimation {
    state: RevealState,
    points_to_draw: usize,
}

impl RevealAnimation {
    /// Create an idle driver with nothing revealed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Check whether a reveal is running.
    pub fn is_running(&self) -> bool {
        matches!(self.state, RevealState::Running { .. })
    }

    /// Number of points to draw this frame.
    pub fn points_to_draw(&self) -> usize {
        self.points_to_draw
    }

    /// Hide everything again. A running reveal keeps running.
    pub fn reset(&mut self) {
        self.points_to_draw = 0;
    }

    /// Begin a reveal. Returns `false` if one is already running.
    pub fn start(&mut self, duration: Duration) -> bool {
        if self.is_running() {
            return false;
        }
        debug!(?duration, "reveal started");
        self.state = RevealState::Running { duration };
        true
    }

    /// Show every point at once and stop any running reveal.
    pub fn finish(&mut self, sampled_count: usize) {
        self.points_to_draw = sampled_count;
        if self.is_running() {
            debug!(points = sampled_count, "reveal finished");
        }
        self.state = RevealState::Idle;
    }

    /// Decide what a redraw should do about the reveal.
    ///
    /// Returns the duration of a reveal the host should start driving, or
    /// `None` when nothing needs animating. With `animate` off, every point
    /// is shown immediately.
    pub fn on_redraw(
        &mut self,
        sampled_count: usize,
        animate: bool,
        duration: Duration,
    ) -> Option<Duration> {
        if self.points_to_draw == sampled_count || self.is_running() {
            return None;
        }
        if !animate {
            self.points_to_draw = sampled_count;
            return None;
        }
        self.start(duration).then_some(duration)
    }

    /// Advance a running reveal to normalized time `t`.
    ///
    /// `t` is clamped into `0..=1`; reaching `1` shows every point and ends the
    /// reveal. Returns `true` when a redraw is needed, which is every tick of a
    /// running reveal.
    pub fn tick(&mut self, t: f64, sampled_count: usize) -> bool {
        if !self.is_running() {
            return false;
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t >= 1.0 {
            self.finish(sampled_count);
        } else {
            self.points_to_draw = (sampled_count as f64 * t).floor() as usize;
            trace!(t, points = self.points_to_draw, "reveal tick");
        }
        true
    }
}
