//! Page geometry.
//!
//! The landing page is one tall document (hero, then "how it works") scrolled
//! under a fixed navbar. Both the reducer (scroll clamping, anchors, reveal)
//! and the renderer read section positions from here, so they always agree.

use yap_core::content::STEPS;
use yap_core::scroll::Anchor;

/// Rows taken by the fixed navbar.
pub const NAVBAR_HEIGHT: u16 = 2;
/// Rows taken by the key hint line at the bottom.
pub const HINT_HEIGHT: u16 = 1;
/// Smallest hero that still fits all of its content.
pub const HERO_MIN_HEIGHT: u16 = 22;

/// Heading block of "how it works" (padding, title, subtitle).
pub const STEPS_HEADER_HEIGHT: u16 = 6;
/// One step card including its border.
pub const STEP_CARD_HEIGHT: u16 = 7;
/// Final call to action (padding around a 3-row button).
pub const STEPS_CTA_HEIGHT: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub width: u16,
    /// Rows of document visible between navbar and hint line.
    pub viewport: u16,
    pub hero_height: u16,
    pub steps_height: u16,
    pub steps_columns: u16,
}

impl PageLayout {
    pub fn compute(width: u16, height: u16) -> Self {
        let viewport = height.saturating_sub(NAVBAR_HEIGHT + HINT_HEIGHT).max(1);
        let hero_height = viewport.max(HERO_MIN_HEIGHT);
        let steps_columns = steps_columns(width);
        let card_rows = (STEPS.len() as u16).div_ceil(steps_columns);
        let steps_height = STEPS_HEADER_HEIGHT + card_rows * STEP_CARD_HEIGHT + STEPS_CTA_HEIGHT;
        Self {
            width,
            viewport,
            hero_height,
            steps_height,
            steps_columns,
        }
    }

    pub fn total_height(&self) -> u16 {
        self.hero_height + self.steps_height
    }

    /// Largest valid scroll offset.
    pub fn max_offset(&self) -> usize {
        usize::from(self.total_height().saturating_sub(self.viewport))
    }

    /// First document row of an anchor.
    pub fn anchor_row(&self, anchor: Anchor) -> usize {
        match anchor {
            Anchor::Hero => 0,
            Anchor::HowItWorks => usize::from(self.hero_height),
        }
    }

    /// Fraction of the "how it works" section inside the viewport.
    pub fn steps_visible_fraction(&self, offset: usize) -> f32 {
        let view_start = offset;
        let view_end = offset + usize::from(self.viewport);
        let start = usize::from(self.hero_height);
        let end = start + usize::from(self.steps_height);
        let overlap = view_end.min(end).saturating_sub(view_start.max(start));
        overlap as f32 / f32::from(self.steps_height.max(1))
    }
}

/// Grid columns for the step cards at a given width.
pub fn steps_columns(width: u16) -> u16 {
    match width {
        100.. => 4,
        56..=99 => 2,
        _ => 1,
    }
}
