use std::time::Duration;

use yap_core::reveal::Reveal;

/// "How it works" section state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepsState {
    pub reveal: Reveal,
}

impl StepsState {
    /// Feeds the current visibility into the once-only reveal latch.
    pub fn observe(&mut self, visible_fraction: f32, now: Duration) {
        if self.reveal.observe(visible_fraction, now) {
            tracing::debug!(at_ms = now.as_millis() as u64, "how it works revealed");
        }
    }
}
