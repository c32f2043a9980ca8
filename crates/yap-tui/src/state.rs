//! Application state composition.
//!
//! ```text
//! AppState
//! ├── timeline: Timeline      (deterministic timer queue, fed by Tick)
//! ├── now: Duration           (time since mount)
//! ├── layout: PageLayout      (section geometry, from the last Frame)
//! ├── hero: HeroState         (typewriter, particles, pointer parallax)
//! ├── scroll: ScrollState     (document offset, in-flight smooth scroll)
//! └── steps: StepsState       ("how it works" reveal latch)
//! ```
//!
//! Everything here is plain data. The runtime turns wall-clock time into
//! `Tick { now }` events, so tests can drive the whole page on simulated time.

use std::time::Duration;

use anyhow::Result;
use yap_core::config::Config;
use yap_core::typewriter::Timeline;

use crate::features::hero::HeroState;
use crate::features::scroll::ScrollState;
use crate::features::steps::StepsState;
use crate::layout::PageLayout;

pub struct AppState {
    pub timeline: Timeline,
    pub now: Duration,
    pub layout: PageLayout,
    pub hero: HeroState,
    pub scroll: ScrollState,
    pub steps: StepsState,
    pub should_quit: bool,
}

impl AppState {
    /// Mounts the page: builds the script and starts the typewriter.
    ///
    /// # Errors
    /// Returns an error if the configured phrases do not form a valid script.
    pub fn new(config: &Config) -> Result<Self> {
        let mut timeline = Timeline::new();
        let hero = HeroState::mount(config, &mut timeline)?;
        Ok(Self {
            timeline,
            now: Duration::ZERO,
            layout: PageLayout::compute(0, 0),
            hero,
            scroll: ScrollState::new(&config.scroll),
            steps: StepsState::default(),
            should_quit: false,
        })
    }

    /// Unmounts the page. Cancels every pending timer; safe to call twice.
    pub fn shutdown(&mut self) {
        self.hero.typewriter.stop(&mut self.timeline);
    }
}
