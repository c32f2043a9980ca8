use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;
use yap_core::content::{self, STEPS, Step};
use yap_core::reveal;

use super::StepsState;
use crate::common::style::{
    ACCENT, ON_ACCENT, SECTION_BG, SECTION_CARD, SECTION_MUTED, SECTION_TEXT, faded,
};
use crate::common::{truncate_with_ellipsis, wrap_words};
use crate::layout::{STEP_CARD_HEIGHT, STEPS_CTA_HEIGHT, STEPS_HEADER_HEIGHT};

const CONTENT_MAX_WIDTH: u16 = 110;
const SUBTITLE_MAX_LINES: usize = 2;

/// Renders "how it works". Only the background shows until the section has
/// been revealed.
pub fn render_steps(
    steps: &StepsState,
    now: Duration,
    columns: u16,
    buf: &mut Buffer,
    area: Rect,
) {
    buf.set_style(area, Style::new().bg(SECTION_BG));
    let Some(elapsed) = steps.reveal.elapsed(now) else {
        return;
    };

    let width = area.width.saturating_sub(4).min(CONTENT_MAX_WIDTH);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);

    let columns = columns.max(1);
    let card_rows = (STEPS.len() as u16).div_ceil(columns);
    let [header, grid, cta] = Layout::vertical([
        Constraint::Length(STEPS_HEADER_HEIGHT),
        Constraint::Length(card_rows * STEP_CARD_HEIGHT),
        Constraint::Length(STEPS_CTA_HEIGHT),
    ])
    .areas(column);

    render_header(elapsed, buf, header);
    render_grid(elapsed, columns, buf, grid);
    render_cta(elapsed, buf, cta);
}

fn render_header(elapsed: Duration, buf: &mut Buffer, area: Rect) {
    let Some(style) = faded(Style::new(), reveal::STEPS_HEADING.opacity(elapsed)) else {
        return;
    };
    let mut lines = vec![
        Line::default(),
        Line::styled(content::STEPS_TITLE, style.fg(SECTION_TEXT).bold()),
        Line::default(),
    ];
    lines.extend(
        wrap_words(content::STEPS_SUBTITLE, usize::from(area.width))
            .into_iter()
            .take(SUBTITLE_MAX_LINES)
            .map(|l| Line::styled(l, style.fg(SECTION_MUTED))),
    );
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_grid(elapsed: Duration, columns: u16, buf: &mut Buffer, area: Rect) {
    let columns = usize::from(columns);
    let row_count = STEPS.len().div_ceil(columns);
    let rows = Layout::vertical(vec![Constraint::Length(STEP_CARD_HEIGHT); row_count]).split(area);
    for (row_index, row) in rows.iter().enumerate() {
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .spacing(2)
            .split(*row);
        for (col_index, cell) in cells.iter().enumerate() {
            let index = row_index * columns + col_index;
            if let Some(step) = STEPS.get(index) {
                render_card(step, index, elapsed, buf, *cell);
            }
        }
    }
}

fn render_card(step: &Step, index: usize, elapsed: Duration, buf: &mut Buffer, area: Rect) {
    let Some(style) = faded(Style::new(), reveal::step_card(index).opacity(elapsed)) else {
        return;
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(style.fg(SECTION_MUTED))
        .style(Style::new().bg(SECTION_CARD));
    let inner = block.inner(area);
    block.render(area, buf);

    let inner_width = usize::from(inner.width);
    let badge = Line::from(vec![
        Span::styled(
            format!(" {} ", step.number),
            style.fg(ON_ACCENT).bg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(step.icon, style),
    ]);
    let mut lines = vec![
        badge,
        Line::styled(
            truncate_with_ellipsis(step.title, inner_width),
            style.fg(SECTION_TEXT).add_modifier(Modifier::BOLD),
        ),
    ];
    let description_rows = usize::from(inner.height.saturating_sub(2));
    let mut description = wrap_words(step.description, inner_width);
    if description.len() > description_rows {
        description.truncate(description_rows);
        if let Some(last) = description.last_mut() {
            *last = truncate_with_ellipsis(&format!("{last}…"), inner_width);
        }
    }
    lines.extend(
        description
            .into_iter()
            .map(|l| Line::styled(l, style.fg(SECTION_MUTED))),
    );
    Paragraph::new(lines).render(inner, buf);
}

fn render_cta(elapsed: Duration, buf: &mut Buffer, area: Rect) {
    let Some(style) = faded(Style::new(), reveal::STEPS_CTA.opacity(elapsed)) else {
        return;
    };
    let label = content::GET_STARTED;
    let [_, row, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);
    let [button] = Layout::horizontal([Constraint::Length(label.width() as u16 + 6)])
        .flex(Flex::Center)
        .areas(row);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(style.fg(ACCENT))
        .style(style.fg(ON_ACCENT).bg(ACCENT).add_modifier(Modifier::BOLD));
    let inner = block.inner(button);
    block.render(button, buf);
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PageLayout;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render_at(steps: &StepsState, now: Duration, width: u16) -> String {
        let layout = PageLayout::compute(width, 40);
        let area = Rect::new(0, 0, width, layout.steps_height);
        let mut buf = Buffer::empty(area);
        render_steps(steps, now, layout.steps_columns, &mut buf, area);
        buffer_text(&buf)
    }

    #[test]
    fn test_hidden_until_revealed() {
        let text = render_at(&StepsState::default(), Duration::from_secs(5), 120);
        assert!(!text.contains(content::STEPS_TITLE));
    }

    #[test]
    fn test_revealed_section_shows_cards_and_cta() {
        let mut steps = StepsState::default();
        steps.observe(0.5, Duration::from_secs(1));
        let text = render_at(&steps, Duration::from_secs(3), 120);
        assert!(text.contains(content::STEPS_TITLE));
        assert!(text.contains("01"));
        assert!(text.contains("04"));
        assert!(text.contains(content::GET_STARTED));
    }

    #[test]
    fn test_cards_stagger_in() {
        let mut steps = StepsState::default();
        steps.observe(1.0, Duration::ZERO);
        let text = render_at(&steps, Duration::from_millis(150), 120);
        assert!(text.contains("01"));
        assert!(text.contains("02"));
        assert!(!text.contains("03"));
        assert!(!text.contains(content::GET_STARTED));
    }

    #[test]
    fn test_single_column_fits_all_steps() {
        let mut steps = StepsState::default();
        steps.observe(1.0, Duration::ZERO);
        let text = render_at(&steps, Duration::from_secs(2), 40);
        for step in STEPS {
            assert!(text.contains(step.number));
        }
    }
}
