//! Hero view.
//!
//! Layers, back to front: patterned background (shifted by the pointer),
//! drifting particles, then the centered content stack and the scroll
//! indicator.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;
use yap_core::content::{self, FEATURES};
use yap_core::particles::{Particle, ParticleField};
use yap_core::reveal;

use super::HeroState;
use crate::common::style::{
    ACCENT, HERO_BG, HERO_CARD, HERO_MUTED, HERO_PARTICLE, HERO_PATTERN, HERO_TEXT, ON_ACCENT,
    faded,
};
use crate::common::{truncate_with_ellipsis, wrap_words};

/// Widest the content stack gets, in columns.
const CONTENT_MAX_WIDTH: u16 = 100;
/// Below this width feature cards collapse into one line each.
const FEATURE_GRID_MIN_WIDTH: u16 = 72;
const FEATURE_CARD_HEIGHT: u16 = 5;
const BUTTON_HEIGHT: u16 = 3;
/// Rows kept free at the bottom for the scroll indicator.
const INDICATOR_ROWS: u16 = 3;

/// Background tile spacing.
const PATTERN_COLS: u16 = 6;
const PATTERN_ROWS: u16 = 3;
/// Furthest the background shifts when the pointer crosses the screen.
const PARALLAX_COLS: f32 = 5.0;
const PARALLAX_ROWS: f32 = 2.0;

/// One caret blink (on → off → on).
const CARET_PERIOD_MS: u128 = 800;
/// One bounce of the scroll indicator.
const BOUNCE_PERIOD_MS: u128 = 1500;

pub fn render_hero(hero: &HeroState, now: Duration, buf: &mut Buffer, area: Rect) {
    buf.set_style(area, Style::new().bg(HERO_BG));
    render_pattern(hero.pointer, buf, area);
    if let Some(field) = &hero.particles {
        render_particles(field, now, buf, area);
    }

    let content_area = Rect {
        height: area.height.saturating_sub(INDICATOR_ROWS),
        ..area
    };
    render_content(hero, now, buf, content_area);
    render_scroll_indicator(now, buf, area);
}

fn render_pattern(pointer: (f32, f32), buf: &mut Buffer, area: Rect) {
    let shift_x = (pointer.0 * PARALLAX_COLS).round() as u16;
    let shift_y = (pointer.1 * PARALLAX_ROWS).round() as u16;
    let style = Style::new().fg(HERO_PATTERN);
    for y in area.top()..area.bottom() {
        if (y - area.y + shift_y) % PATTERN_ROWS != 0 {
            continue;
        }
        for x in area.left()..area.right() {
            if (x - area.x + shift_x) % PATTERN_COLS == 0 {
                buf.set_string(x, y, "+", style);
            }
        }
    }
}

fn particle_glyph(particle: &Particle) -> &'static str {
    match particle.apparent_size() {
        s if s < 35.0 => "·",
        s if s < 60.0 => "•",
        _ => "●",
    }
}

fn render_particles(field: &ParticleField, now: Duration, buf: &mut Buffer, area: Rect) {
    let style = Style::new().fg(HERO_PARTICLE);
    for particle in field.particles() {
        let (px, py) = particle.position_at(now);
        if !(0.0..100.0).contains(&px) || !(0.0..100.0).contains(&py) {
            continue;
        }
        let x = area.x + (px / 100.0 * f32::from(area.width)) as u16;
        let y = area.y + (py / 100.0 * f32::from(area.height)) as u16;
        if x < area.right() && y < area.bottom() {
            buf.set_string(x, y, particle_glyph(particle), style);
        }
    }
}

fn render_content(hero: &HeroState, now: Duration, buf: &mut Buffer, area: Rect) {
    let width = area.width.saturating_sub(4).min(CONTENT_MAX_WIDTH);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);

    let subtitle = wrap_words(content::HERO_SUBTITLE, usize::from(width));
    let wide = width >= FEATURE_GRID_MIN_WIDTH;
    let features_height = if wide {
        FEATURE_CARD_HEIGHT
    } else {
        FEATURES.len() as u16
    };

    let [title, _, subtitle_area, _, typer, _, features, _, buttons] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(subtitle.len() as u16),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(features_height),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(column);

    if let Some(style) = faded(
        Style::new().fg(HERO_TEXT).bold(),
        reveal::HERO_TITLE.opacity(now),
    ) {
        Paragraph::new(content::HERO_TITLE)
            .style(style)
            .alignment(Alignment::Center)
            .render(title, buf);
    }

    if let Some(style) = faded(
        Style::new().fg(HERO_MUTED),
        reveal::HERO_SUBTITLE.opacity(now),
    ) {
        let lines: Vec<Line> = subtitle.into_iter().map(Line::from).collect();
        Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center)
            .render(subtitle_area, buf);
    }

    render_typewriter(hero, now, buf, typer);

    if wide {
        render_feature_cards(now, buf, features);
    } else {
        render_feature_lines(now, buf, features);
    }

    render_buttons(now, buf, buttons);
}

fn caret_visible(now: Duration) -> bool {
    let t = now.as_millis() % CARET_PERIOD_MS;
    !(CARET_PERIOD_MS / 4..CARET_PERIOD_MS * 3 / 4).contains(&t)
}

fn render_typewriter(hero: &HeroState, now: Duration, buf: &mut Buffer, area: Rect) {
    let Some(style) = faded(
        Style::new().fg(HERO_TEXT),
        reveal::HERO_TYPEWRITER.opacity(now),
    ) else {
        return;
    };
    let caret = if caret_visible(now) { "▍" } else { " " };
    let line = Line::from(vec![
        Span::styled(hero.typewriter.rendered().to_string(), style),
        Span::styled(caret, style),
    ]);
    let middle = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(middle, buf);
}

fn render_feature_cards(now: Duration, buf: &mut Buffer, area: Rect) {
    let cards: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3])
        .spacing(2)
        .areas(area);

    for (i, (feature, card)) in FEATURES.iter().zip(cards).enumerate() {
        let Some(style) = faded(Style::new(), reveal::feature_card(i).opacity(now)) else {
            continue;
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style.fg(HERO_PATTERN))
            .style(Style::new().bg(HERO_CARD));
        let inner = block.inner(card);
        block.render(card, buf);

        let inner_width = usize::from(inner.width);
        let mut lines = vec![Line::styled(
            truncate_with_ellipsis(&format!("{} {}", feature.icon, feature.title), inner_width),
            style.fg(HERO_TEXT).add_modifier(Modifier::BOLD),
        )];
        lines.extend(
            wrap_words(feature.description, inner_width)
                .into_iter()
                .take(usize::from(FEATURE_CARD_HEIGHT - 3))
                .map(|l| Line::styled(l, style.fg(HERO_MUTED))),
        );
        Paragraph::new(lines).render(inner, buf);
    }
}

fn render_feature_lines(now: Duration, buf: &mut Buffer, area: Rect) {
    for (i, feature) in FEATURES.iter().enumerate() {
        let row = area.y + i as u16;
        if row >= area.bottom() {
            break;
        }
        let Some(style) = faded(Style::new(), reveal::feature_card(i).opacity(now)) else {
            continue;
        };
        let head = format!("{} {}", feature.icon, feature.title);
        let tail_width = usize::from(area.width).saturating_sub(head.width() + 3);
        let line = Line::from(vec![
            Span::styled(head, style.fg(HERO_TEXT).add_modifier(Modifier::BOLD)),
            Span::styled(" · ", style.fg(HERO_PATTERN)),
            Span::styled(
                truncate_with_ellipsis(feature.description, tail_width),
                style.fg(HERO_MUTED),
            ),
        ]);
        Paragraph::new(line).render(Rect { y: row, height: 1, ..area }, buf);
    }
}

fn render_button(label: &str, primary: bool, fade: Style, buf: &mut Buffer, area: Rect) {
    let (border, fill) = if primary {
        (
            fade.fg(ACCENT),
            fade.fg(ON_ACCENT).bg(ACCENT).add_modifier(Modifier::BOLD),
        )
    } else {
        (fade.fg(HERO_TEXT), fade.fg(HERO_TEXT).add_modifier(Modifier::BOLD))
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(fill);
    let inner = block.inner(area);
    block.render(area, buf);
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .render(inner, buf);
}

fn render_buttons(now: Duration, buf: &mut Buffer, area: Rect) {
    let Some(fade) = faded(Style::new(), reveal::HERO_BUTTONS.opacity(now)) else {
        return;
    };
    let primary = format!("{} ⏎", content::START_YAPPING);
    let secondary = content::EXPLORE_CONTENT;
    let primary_width = primary.width() as u16 + 6;
    let secondary_width = secondary.width() as u16 + 6;

    if area.width < primary_width + secondary_width + 2 {
        let [only] = Layout::horizontal([Constraint::Length(primary_width)])
            .flex(Flex::Center)
            .areas(area);
        render_button(&primary, true, fade, buf, only);
        return;
    }

    let [left, right] = Layout::horizontal([
        Constraint::Length(primary_width),
        Constraint::Length(secondary_width),
    ])
    .flex(Flex::Center)
    .spacing(2)
    .areas(area);
    render_button(&primary, true, fade, buf, left);
    render_button(secondary, false, fade, buf, right);
}

fn bounce(now: Duration) -> u16 {
    let t = now.as_millis() % BOUNCE_PERIOD_MS;
    u16::from((BOUNCE_PERIOD_MS / 4..BOUNCE_PERIOD_MS * 3 / 4).contains(&t))
}

fn render_scroll_indicator(now: Duration, buf: &mut Buffer, area: Rect) {
    let Some(style) = faded(
        Style::new().fg(HERO_MUTED),
        reveal::SCROLL_INDICATOR.opacity(now),
    ) else {
        return;
    };
    if area.height < INDICATOR_ROWS {
        return;
    }
    let top = area.bottom() - INDICATOR_ROWS + bounce(now);
    let lines = vec![
        Line::from(format!("{} (n)", content::SCROLL_DOWN)),
        Line::from("↓"),
    ];
    let rows = Rect {
        y: top,
        height: (area.bottom() - top).min(2),
        ..area
    };
    Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .render(rows, buf);
}
