//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the boundary where side effects happen. Wall-clock time enters
//! here as `UiEvent::Tick { now }` (time since mount), so the reducer and
//! everything below it run on whatever clock they are fed.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use yap_core::config::Config;
use yap_core::interrupt;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate for animation (60fps = ~16ms per frame).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Full-screen landing page runtime.
///
/// Terminal state is restored on drop, panic, or a second Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Mount time. Every `Tick` carries the time elapsed since.
    started: Instant,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Mounts the page and takes over the terminal.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the terminal
    /// cannot be set up.
    pub fn new(config: &Config) -> Result<Self> {
        // Validate before touching the terminal so errors print normally.
        let state = AppState::new(config)?;

        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            started: now,
            last_tick: now,
        })
    }

    /// Runs the event loop until the user quits or an interrupt arrives.
    ///
    /// # Errors
    /// Returns `InterruptedError` on Ctrl+C from outside the page, or an I/O
    /// error from the terminal.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_mouse()?;
        let result = self.event_loop();
        self.state.shutdown();
        let _ = terminal::disable_mouse();
        tracing::info!(
            elapsed_ms = self.started.elapsed().as_millis() as u64,
            "landing page closed"
        );
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            interrupt::check()?;

            let mut events = self.collect_events()?;

            // Frame goes first so layout is current for everything after it.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(event, UiEvent::Tick { .. } | UiEvent::Terminal(_)) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty && !self.state.should_quit {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects terminal input, blocking at most until the next tick is due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        let time_until_tick = FRAME_DURATION.saturating_sub(self.last_tick.elapsed());

        if event::poll(time_until_tick)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= FRAME_DURATION {
            events.push(UiEvent::Tick {
                now: self.started.elapsed(),
            });
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => self.state.should_quit = true,
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
