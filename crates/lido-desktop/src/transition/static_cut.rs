//! Two-phase static cut

use super::TransitionToken;

/// Phase of the channel player's media layers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Main media visible, static hidden
    #[default]
    Idle,
    /// Static visible, main media hidden and paused
    Static,
}

/// An in-flight static cut
#[derive(Clone, Debug)]
pub struct StaticCut {
    /// Token issued for this cut
    pub token: TransitionToken,
    /// Start time (ms timestamp)
    pub start_ms: f64,
    /// Lineup index being tuned to
    pub target: usize,
    /// Static duration for this cut
    pub duration_ms: u32,
}

impl StaticCut {
    /// Start a cut at `start_ms` lasting `duration_ms`
    pub fn new(token: TransitionToken, start_ms: f64, target: usize, duration_ms: u32) -> Self {
        Self {
            token,
            start_ms,
            target,
            duration_ms,
        }
    }

    /// Progress from 0.0 to 1.0
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = (now_ms - self.start_ms) as f32;
        (elapsed / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Check if the static has run its course
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
