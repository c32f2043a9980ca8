//! Document scroll state.
//!
//! Manual scrolling moves the offset immediately and cancels any smooth
//! scroll in flight. Smooth scrolls are fire-and-forget: they run to their
//! target unless interrupted.

use std::time::Duration;

use yap_core::config::ScrollConfig;
use yap_core::scroll::{ScrollTarget, SmoothScroll};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveScroll {
    scroll: SmoothScroll,
    started: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    /// First document row shown under the navbar.
    pub offset: usize,
    active: Option<ActiveScroll>,
    duration: Duration,
    start_target: ScrollTarget,
}

impl ScrollState {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            offset: 0,
            active: None,
            duration: config.duration(),
            start_target: config.start_target(),
        }
    }

    /// Target of the primary call to action.
    pub fn start_target(&self) -> ScrollTarget {
        self.start_target
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a smooth scroll from the current offset to `row`.
    pub fn scroll_to(&mut self, row: usize, now: Duration) {
        tracing::debug!(from = self.offset, to = row, "smooth scroll");
        self.active = Some(ActiveScroll {
            scroll: SmoothScroll::new(self.offset, row, self.duration),
            started: now,
        });
    }

    /// Moves by `delta` rows right away, clamped to `[0, max]`.
    pub fn scroll_by(&mut self, delta: isize, max: usize) {
        self.active = None;
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }

    /// Jumps to `row` right away.
    pub fn jump_to(&mut self, row: usize, max: usize) {
        self.active = None;
        self.offset = row.min(max);
    }

    /// Advances the smooth scroll, if any.
    pub fn tick(&mut self, now: Duration, max: usize) {
        let Some(active) = self.active else {
            return;
        };
        let elapsed = now.saturating_sub(active.started);
        self.offset = active.scroll.offset_at(elapsed).min(max);
        if active.scroll.is_finished(elapsed) {
            self.active = None;
        }
    }

    /// Keeps the offset valid after a resize.
    pub fn clamp(&mut self, max: usize) {
        self.offset = self.offset.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn state() -> ScrollState {
        ScrollState::new(&ScrollConfig::default())
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut scroll = state();
        scroll.scroll_to(30, ms(1000));
        scroll.tick(ms(1000), 100);
        assert_eq!(scroll.offset, 0);
        scroll.tick(ms(1400), 100);
        assert_eq!(scroll.offset, 15);
        scroll.tick(ms(1800), 100);
        assert_eq!(scroll.offset, 30);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_manual_scroll_cancels_smooth_scroll() {
        let mut scroll = state();
        scroll.scroll_to(30, ms(0));
        scroll.tick(ms(400), 100);
        scroll.scroll_by(1, 100);
        assert_eq!(scroll.offset, 16);
        assert!(!scroll.is_animating());
        scroll.tick(ms(800), 100);
        assert_eq!(scroll.offset, 16);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut scroll = state();
        scroll.scroll_by(-5, 10);
        assert_eq!(scroll.offset, 0);
        scroll.scroll_by(50, 10);
        assert_eq!(scroll.offset, 10);
    }

    #[test]
    fn test_default_start_target_sits_above_section() {
        assert_eq!(state().start_target().offset, -2);
    }
}
