//! Shared palette and fade styling.

use ratatui::style::{Color, Modifier, Style};

pub const HERO_BG: Color = Color::Rgb(15, 23, 42);
pub const HERO_PATTERN: Color = Color::Rgb(51, 65, 85);
pub const HERO_PARTICLE: Color = Color::Rgb(100, 116, 139);
pub const HERO_TEXT: Color = Color::White;
pub const HERO_MUTED: Color = Color::Rgb(209, 213, 219);
pub const HERO_CARD: Color = Color::Rgb(30, 41, 59);

pub const ACCENT: Color = Color::Rgb(20, 184, 166);
pub const ON_ACCENT: Color = Color::White;

pub const SECTION_BG: Color = Color::Rgb(243, 244, 246);
pub const SECTION_TEXT: Color = Color::Rgb(17, 24, 39);
pub const SECTION_MUTED: Color = Color::Rgb(75, 85, 99);
pub const SECTION_CARD: Color = Color::White;

pub const NAV_BG: Color = Color::Rgb(226, 232, 240);
pub const NAV_TEXT: Color = Color::Black;

/// Applies a fade-in opacity to a style.
///
/// Terminals have no alpha, so this is three-step: hidden (`None`), dim,
/// or fully drawn.
pub fn faded(style: Style, opacity: f32) -> Option<Style> {
    if opacity <= 0.0 {
        None
    } else if opacity < 0.6 {
        Some(style.add_modifier(Modifier::DIM))
    } else {
        Some(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faded_steps() {
        let base = Style::default().fg(HERO_TEXT);
        assert_eq!(faded(base, 0.0), None);
        assert_eq!(faded(base, 0.3), Some(base.add_modifier(Modifier::DIM)));
        assert_eq!(faded(base, 1.0), Some(base));
    }
}
