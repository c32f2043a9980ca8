//! Pure view functions for the landing page.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state. The scrollable document (hero followed by "how it works")
//! is drawn into an offscreen buffer at full height, and the rows under the
//! current scroll offset are copied into the frame.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::common::style::{NAV_BG, SECTION_MUTED};
use crate::common::truncate_with_ellipsis;
use crate::features::hero::render_hero;
use crate::features::navbar::render_navbar;
use crate::features::steps::render_steps;
use crate::layout::{HINT_HEIGHT, NAVBAR_HEIGHT, PageLayout};
use crate::state::AppState;

const KEY_HINTS: &str = "↑↓ scroll · ⏎ start yapping · n how it works · g top · q quit";

/// Renders the whole page to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let layout = PageLayout::compute(area.width, area.height);
    let [nav, body, hint] = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(HINT_HEIGHT),
    ])
    .areas(area);

    let buf = frame.buffer_mut();
    render_document(app, &layout, buf, body);
    render_navbar(buf, nav);
    render_hint(app, &layout, buf, hint);
}

fn render_document(app: &AppState, layout: &PageLayout, buf: &mut Buffer, body: Rect) {
    if body.is_empty() {
        return;
    }
    let doc_area = Rect::new(0, 0, body.width, layout.total_height());
    let mut doc = Buffer::empty(doc_area);
    render_hero(
        &app.hero,
        app.now,
        &mut doc,
        Rect::new(0, 0, body.width, layout.hero_height),
    );
    render_steps(
        &app.steps,
        app.now,
        layout.steps_columns,
        &mut doc,
        Rect::new(0, layout.hero_height, body.width, layout.steps_height),
    );

    let offset = app.scroll.offset.min(layout.max_offset());
    for row in 0..body.height {
        let Ok(src_y) = u16::try_from(offset + usize::from(row)) else {
            break;
        };
        if src_y >= doc_area.bottom() {
            break;
        }
        for x in 0..body.width {
            if let (Some(src), Some(dst)) =
                (doc.cell((x, src_y)), buf.cell_mut((body.x + x, body.y + row)))
            {
                *dst = src.clone();
            }
        }
    }
}

fn render_hint(app: &AppState, layout: &PageLayout, buf: &mut Buffer, area: Rect) {
    let max = layout.max_offset();
    let percent = if max == 0 {
        100
    } else {
        app.scroll.offset.min(max) * 100 / max
    };
    let position = format!("{percent:>3}% ");
    let [left, right] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(position.len() as u16),
    ])
    .areas(area);

    buf.set_style(area, Style::new().bg(NAV_BG).fg(SECTION_MUTED));
    let hints = truncate_with_ellipsis(KEY_HINTS, usize::from(left.width).saturating_sub(1));
    Paragraph::new(Line::from(vec![Span::raw(" "), Span::raw(hints)])).render(left, buf);
    Paragraph::new(position)
        .alignment(Alignment::Right)
        .render(right, buf);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use yap_core::config::Config;
    use yap_core::content;

    use super::*;

    fn screen(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_navbar_and_hint_are_fixed() {
        let mut app = AppState::new(&Config::default()).unwrap();
        app.layout = PageLayout::compute(100, 30);
        app.scroll.jump_to(20, app.layout.max_offset());
        let text = screen(&app, 100, 30);
        let first_line = text.lines().next().unwrap();
        assert!(first_line.contains(content::BRAND));
        assert!(first_line.contains("[ Dashboard ]"));
        assert!(text.lines().last().unwrap().contains("q quit"));
    }

    #[test]
    fn test_scrolled_to_end_shows_revealed_steps() {
        let mut app = AppState::new(&Config::default()).unwrap();
        app.layout = PageLayout::compute(120, 40);
        app.now = std::time::Duration::from_secs(10);
        app.steps.observe(1.0, std::time::Duration::from_secs(5));
        app.scroll.jump_to(usize::MAX, app.layout.max_offset());
        let text = screen(&app, 120, 40);
        assert!(text.contains(content::GET_STARTED));
        assert!(!text.contains(content::HERO_TITLE));
        assert!(text.contains("100%"));
    }
}
