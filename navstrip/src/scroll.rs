use std::time::Instant;

use crate::animation::SmoothScroll;
use crate::transitions::TransitionConfig;

/// Whether the region sits at its leftmost/rightmost extent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryState {
    pub at_start: bool,
    pub at_end: bool,
}

impl BoundaryState {
    /// Arrow enablement derived from this boundary state.
    pub fn arrows(self) -> ArrowControlState {
        ArrowControlState {
            left_enabled: !self.at_start,
            right_enabled: !self.at_end,
        }
    }
}

/// Enabled state of the left/right arrow controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowControlState {
    pub left_enabled: bool,
    pub right_enabled: bool,
}

/// The horizontally scrollable container.
///
/// Offsets are in pixels and always satisfy
/// `0 <= offset <= max(0, content_extent - viewport_extent)`.
#[derive(Debug, Clone)]
pub struct ScrollRegion {
    offset: f32,
    content_extent: f32,
    viewport_extent: f32,
    auto_scroll: bool,
    transition: TransitionConfig,
    animation: Option<SmoothScroll>,
}

impl ScrollRegion {
    pub fn new(content_extent: f32, viewport_extent: f32) -> Self {
        Self {
            offset: 0.0,
            content_extent: content_extent.max(0.0),
            viewport_extent: viewport_extent.max(0.0),
            auto_scroll: false,
            transition: TransitionConfig::default(),
            animation: None,
        }
    }

    /// Measure a region from the viewport width and the right edges of its items.
    pub fn measure(viewport_extent: f32, item_right_edges: impl IntoIterator<Item = f32>) -> Self {
        let content = item_right_edges.into_iter().fold(0.0, f32::max);
        Self::new(content, viewport_extent)
    }

    pub fn with_auto_scroll(mut self, auto_scroll: bool) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = self.clamp(offset);
        self
    }

    // -------------------------------------------------------------------------
    // Read
    // -------------------------------------------------------------------------

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Scrollable width. Never smaller than the viewport.
    pub fn content_extent(&self) -> f32 {
        self.content_extent.max(self.viewport_extent)
    }

    pub fn viewport_extent(&self) -> f32 {
        self.viewport_extent
    }

    pub fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> f32 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    /// Clamp a requested offset into the reachable range.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, self.max_offset())
    }

    /// Boundary state with `tolerance` pixels of slack on both ends.
    pub fn boundary(&self, tolerance: f32) -> BoundaryState {
        BoundaryState {
            at_start: self.offset <= tolerance,
            at_end: self.offset >= self.content_extent() - self.viewport_extent - tolerance,
        }
    }

    // -------------------------------------------------------------------------
    // Immediate updates
    // -------------------------------------------------------------------------

    /// Set the offset without animating. Returns true if the offset changed.
    pub fn set_offset(&mut self, value: f32) -> bool {
        let clamped = self.clamp(value);
        if clamped == self.offset {
            return false;
        }
        self.offset = clamped;
        true
    }

    /// Update the viewport extent, re-clamping the offset.
    /// Returns true if the offset had to move.
    pub fn set_viewport(&mut self, viewport_extent: f32) -> bool {
        self.viewport_extent = viewport_extent.max(0.0);
        self.set_offset(self.offset)
    }

    // -------------------------------------------------------------------------
    // Animated updates
    // -------------------------------------------------------------------------

    /// Animate towards `target` (clamped). Supersedes any in-flight scroll.
    pub fn scroll_to(&mut self, target: f32, now: Instant) {
        let target = self.clamp(target);
        if target == self.offset {
            self.animation = None;
            return;
        }
        log::trace!("[navstrip] smooth scroll {} -> {}", self.offset, target);
        self.animation = Some(SmoothScroll::new(self.offset, target, now, self.transition));
    }

    /// Animate by `delta` relative to the current offset.
    pub fn scroll_by(&mut self, delta: f32, now: Instant) {
        self.scroll_to(self.offset + delta, now);
    }

    /// Cancel any in-flight animation, leaving the offset where it is.
    pub fn stop(&mut self) {
        self.animation = None;
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Target of the in-flight animation, if any.
    pub fn pending_target(&self) -> Option<f32> {
        self.animation.map(|animation| animation.target())
    }

    /// Advance the in-flight animation to `now`.
    /// Returns true if the offset changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };

        let value = animation.value_at(now);
        if animation.is_finished(now) {
            self.animation = None;
        }
        self.set_offset(value)
    }
}
