//! Entrance animation timing.
//!
//! Hero elements fade in on a fixed schedule after mount. "How it works"
//! elements fade in the first time the section is sufficiently in view, and
//! stay visible afterwards.

use std::time::Duration;

/// Fraction of a section that must be visible to trigger its reveal.
pub const VIEW_THRESHOLD: f32 = 0.3;

/// Delay and duration of one fade-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
    pub delay: Duration,
    pub duration: Duration,
}

impl Fade {
    pub const fn millis(delay: u64, duration: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay),
            duration: Duration::from_millis(duration),
        }
    }

    /// Opacity in `[0, 1]` after `elapsed` since the fade was armed.
    pub fn opacity(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_visible(&self, elapsed: Duration) -> bool {
        self.opacity(elapsed) > 0.0
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        self.opacity(elapsed) >= 1.0
    }
}

pub const HERO_TITLE: Fade = Fade::millis(0, 800);
pub const HERO_SUBTITLE: Fade = Fade::millis(300, 500);
pub const HERO_TYPEWRITER: Fade = Fade::millis(300, 500);
pub const HERO_BUTTONS: Fade = Fade::millis(600, 800);
pub const SCROLL_INDICATOR: Fade = Fade::millis(1500, 1000);
pub const STEPS_HEADING: Fade = Fade::millis(0, 800);
pub const STEPS_CTA: Fade = Fade::millis(400, 500);

/// Feature card `index` in the hero.
pub fn feature_card(index: usize) -> Fade {
    Fade::millis(800 + 100 * index as u64, 600)
}

/// Step card `index` in "how it works".
pub fn step_card(index: usize) -> Fade {
    Fade::millis(100 * index as u64, 500)
}

/// Once-only in-view latch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed_at: Option<Duration>,
}

impl Reveal {
    /// Records how much of the section is visible at `now`.
    ///
    /// Returns `true` the first time the threshold is crossed.
    pub fn observe(&mut self, visible_fraction: f32, now: Duration) -> bool {
        if self.revealed_at.is_some() || visible_fraction < VIEW_THRESHOLD {
            return false;
        }
        self.revealed_at = Some(now);
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }

    /// Time since the reveal fired, if it has.
    pub fn elapsed(&self, now: Duration) -> Option<Duration> {
        self.revealed_at.map(|at| now.saturating_sub(at))
    }
}
