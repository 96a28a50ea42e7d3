use std::time::Instant;

use crate::transitions::TransitionConfig;

/// A single in-flight smooth scroll.
///
/// Starting a new scroll replaces the active one; the new animation begins
/// from wherever the old one had interpolated to.
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    start: Instant,
    config: TransitionConfig,
}

impl SmoothScroll {
    pub fn new(from: f32, to: f32, start: Instant, config: TransitionConfig) -> Self {
        Self {
            from,
            to,
            start,
            config,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Progress in `0.0..=1.0` at `now`.
    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        if self.config.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Interpolated offset at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        lerp(self.from, self.to, self.config.easing.apply(progress))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Linear interpolation.
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
