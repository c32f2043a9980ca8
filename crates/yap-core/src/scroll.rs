//! Smooth scrolling to named anchors.

use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(800);

/// Named sections of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Hero,
    HowItWorks,
}

/// Where a scroll control sends the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTarget {
    pub anchor: Anchor,
    /// Rows added to the anchor position (negative keeps some of the
    /// previous section visible).
    pub offset: i32,
}

impl ScrollTarget {
    pub const fn new(anchor: Anchor, offset: i32) -> Self {
        Self { anchor, offset }
    }

    /// Absolute row for this target, given where the anchor starts.
    pub fn resolve(&self, anchor_row: usize) -> usize {
        (anchor_row as i64 + i64::from(self.offset)).max(0) as usize
    }
}

/// An in-flight smooth scroll between two offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothScroll {
    from: usize,
    to: usize,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: usize, to: usize, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    pub fn target(&self) -> usize {
        self.to
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// Offset after `elapsed`, eased in and out.
    pub fn offset_at(&self, elapsed: Duration) -> usize {
        if self.is_finished(elapsed) || self.duration.is_zero() {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = ease_in_out_quart(t);
        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * eased).round() as usize
    }
}

/// Quartic ease-in-out on `t ∈ [0, 1]`.
pub fn ease_in_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}
