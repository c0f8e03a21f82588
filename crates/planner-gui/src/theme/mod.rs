//! Theme for the planner.
//!
//! Built on Iced's stock light and dark themes. Status colors come from the
//! model's [`ColorTag`] and are resolved here so the model stays GUI-free.
//!
//! - [`spacing`]: spacing, radius and size constants
//! - [`style`]: button and container style functions

pub mod spacing;
pub mod style;

use iced::{Color, Theme};
use planner_model::ColorTag;
use serde::{Deserialize, Serialize};

pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_SM, CELL_HEIGHT, CELL_WIDTH, NAME_WIDTH,
    NAV_WIDTH, PICKER_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
};
pub use style::{
    banner_container, button_ghost, button_primary, button_secondary, card_container,
    muted_text, status_cell_button, tab_button,
};

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Iced theme for this mode.
    pub fn theme(self) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }
}

/// Foreground color for a status tag.
///
/// Dark backgrounds get lighter tints so badges keep their contrast.
pub fn status_color(tag: ColorTag, is_dark: bool) -> Color {
    let (r, g, b) = match (tag, is_dark) {
        (ColorTag::Green, false) => (0x1E, 0x8E, 0x3E),
        (ColorTag::Green, true) => (0x6C, 0xD4, 0x8A),
        (ColorTag::Red, false) => (0xC6, 0x28, 0x28),
        (ColorTag::Red, true) => (0xF2, 0x8B, 0x82),
        (ColorTag::Blue, false) => (0x15, 0x65, 0xC0),
        (ColorTag::Blue, true) => (0x8A, 0xB4, 0xF8),
        (ColorTag::Orange, false) => (0xD9, 0x6C, 0x00),
        (ColorTag::Orange, true) => (0xFC, 0xAD, 0x5E),
        (ColorTag::Purple, false) => (0x6A, 0x1B, 0x9A),
        (ColorTag::Purple, true) => (0xC5, 0x8A, 0xF9),
    };
    Color::from_rgb8(r, g, b)
}

/// Translucent fill behind a status badge.
pub fn status_fill(tag: ColorTag, is_dark: bool) -> Color {
    Color {
        a: if is_dark { 0.22 } else { 0.14 },
        ..status_color(tag, is_dark)
    }
}
