//! Landing page reducer.
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use yap_core::content::{SCROLL_DOWN_TARGET, STEPS};
use yap_core::scroll::{Anchor, ScrollTarget};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::layout::{HINT_HEIGHT, NAVBAR_HEIGHT, PageLayout};
use crate::state::AppState;

/// Rows moved per wheel notch.
const WHEEL_ROWS: isize = 3;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick { now } => {
            handle_tick(app, now);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            handle_frame(app, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_tick(app: &mut AppState, now: Duration) {
    app.now = now.max(app.now);
    let hero = &mut app.hero;
    app.timeline.run_until(app.now, |timeline, id| {
        hero.typewriter.on_timer(id, timeline);
    });
    app.scroll.tick(app.now, app.layout.max_offset());
    observe_steps(app);
}

fn handle_frame(app: &mut AppState, width: u16, height: u16) {
    let layout = PageLayout::compute(width, height);
    if layout != app.layout {
        app.layout = layout;
        app.scroll.clamp(layout.max_offset());
    }
    if app.hero.ensure_particles() {
        tracing::info!(
            width,
            height,
            steps = STEPS.len(),
            "landing page mounted"
        );
    }
    observe_steps(app);
}

fn chrome_height() -> u16 {
    NAVBAR_HEIGHT + HINT_HEIGHT
}

fn observe_steps(app: &mut AppState) {
    let fraction = app.layout.steps_visible_fraction(app.scroll.offset);
    app.steps.observe(fraction, app.now);
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            vec![]
        }
        Event::Resize(width, height) => {
            handle_frame(app, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let max = app.layout.max_offset();
    let page = isize::try_from(app.layout.viewport.saturating_sub(2).max(1))
        .unwrap_or(isize::MAX);

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return quit(app);
        }
        KeyCode::Char('q') | KeyCode::Esc => return quit(app),
        KeyCode::Enter | KeyCode::Char('s') => {
            let target = app.scroll.start_target();
            scroll_to_target(app, target);
        }
        KeyCode::Char('n') => scroll_to_target(app, SCROLL_DOWN_TARGET),
        KeyCode::Down | KeyCode::Char('j') => app.scroll.scroll_by(1, max),
        KeyCode::Up | KeyCode::Char('k') => app.scroll.scroll_by(-1, max),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll.scroll_by(page, max),
        KeyCode::PageUp => app.scroll.scroll_by(-page, max),
        KeyCode::Home | KeyCode::Char('g') => {
            scroll_to_target(app, ScrollTarget::new(Anchor::Hero, 0));
        }
        KeyCode::End | KeyCode::Char('G') => app.scroll.jump_to(max, max),
        _ => return vec![],
    }
    observe_steps(app);
    vec![]
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let max = app.layout.max_offset();
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll.scroll_by(WHEEL_ROWS, max),
        MouseEventKind::ScrollUp => app.scroll.scroll_by(-WHEEL_ROWS, max),
        MouseEventKind::Moved => {
            let height = app.layout.viewport + chrome_height();
            app.hero
                .track_pointer(mouse.column, mouse.row, app.layout.width, height);
            return;
        }
        _ => return,
    }
    observe_steps(app);
}

/// Starts a smooth scroll to `target`, resolved against the current layout.
fn scroll_to_target(app: &mut AppState, target: ScrollTarget) {
    let row = target
        .resolve(app.layout.anchor_row(target.anchor))
        .min(app.layout.max_offset());
    app.scroll.scroll_to(row, app.now);
}

fn quit(app: &mut AppState) -> Vec<UiEffect> {
    app.should_quit = true;
    vec![UiEffect::Quit]
}
