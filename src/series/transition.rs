//! Frame-by-frame interpolation between two sampled curves.

use log::debug;

/// Frames in a full transition; progress grows by `1 / TRANSITION_FRAMES` per frame.
pub const TRANSITION_FRAMES: u32 = 60;

/// Linear blend from `start` to `target`, advanced once per frame.
///
/// Replacing the target discards whatever animation was pending and starts a
/// new one from the curve currently on screen.
#[derive(Debug, Clone)]
pub struct Transition {
    start: Vec<f64>,
    target: Vec<f64>,
    frame: u32,
}

impl Transition {
    /// A settled transition showing `curve`.
    pub fn settled(curve: Vec<f64>) -> Self {
        Self {
            start: curve.clone(),
            target: curve,
            frame: TRANSITION_FRAMES,
        }
    }

    /// Begin animating towards `target`.
    ///
    /// Starts from the displayed curve when it has the same number of points;
    /// otherwise jumps straight to `target` with nothing to animate.
    pub fn retarget(&mut self, target: Vec<f64>) {
        debug!(
            "transition retargeted ({} points, interrupted at {:.2})",
            target.len(),
            self.progress()
        );

        if self.target.len() == target.len() {
            self.start = self.current();
            self.frame = 0;
        } else {
            self.start = target.clone();
            self.frame = TRANSITION_FRAMES;
        }
        self.target = target;
    }

    /// Step one frame. Returns `true` while more frames are needed.
    pub fn advance(&mut self) -> bool {
        if self.is_settled() {
            return false;
        }
        self.frame += 1;
        !self.is_settled()
    }

    pub fn is_settled(&self) -> bool {
        self.frame >= TRANSITION_FRAMES
    }

    /// Fraction of the transition completed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.frame.min(TRANSITION_FRAMES) as f64 / TRANSITION_FRAMES as f64
    }

    pub fn target(&self) -> &[f64] {
        &self.target
    }

    /// Interpolated curve at the current progress.
    pub fn current(&self) -> Vec<f64> {
        if self.is_settled() {
            return self.target.clone();
        }
        let progress = self.progress();
        self.start
            .iter()
            .zip(&self.target)
            .map(|(s, t)| s + (t - s) * progress)
            .collect()
    }
}
