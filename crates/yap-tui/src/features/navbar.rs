//! Fixed navbar: brand on the left, navigation on the right.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use yap_core::content::{BRAND, NAV_ITEMS};

use crate::common::style::{ACCENT, NAV_BG, NAV_TEXT};

pub fn render_navbar(buf: &mut Buffer, area: Rect) {
    let block = Block::new()
        .borders(Borders::BOTTOM)
        .border_style(Style::new().fg(ACCENT))
        .style(Style::new().bg(NAV_BG).fg(NAV_TEXT));
    let inner = block.inner(area);
    block.render(area, buf);

    let padded = inner.inner(Margin::new(2, 0));
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(padded);

    Paragraph::new(Span::styled(BRAND, Style::new().bold())).render(left, buf);
    Paragraph::new(nav_line())
        .alignment(Alignment::Right)
        .render(right, buf);
}

/// The last item is drawn as a button, the rest as plain links.
fn nav_line() -> Line<'static> {
    let mut spans = Vec::new();
    let last = NAV_ITEMS.len().saturating_sub(1);
    for (i, item) in NAV_ITEMS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        if i == last {
            spans.push(Span::styled(
                format!("[ {item} ]"),
                Style::new().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(*item));
        }
    }
    Line::from(spans)
}
