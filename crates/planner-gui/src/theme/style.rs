//! Style functions for buttons, containers and text.
//!
//! Use with `.style(button_primary)` etc.

use iced::widget::{button, container, text};
use iced::{Border, Color, Shadow, Theme, Vector};
use planner_model::ColorTag;

use super::spacing::{BORDER_RADIUS_LG, BORDER_RADIUS_SM};
use super::{status_color, status_fill};

// =============================================================================
// BUTTONS
// =============================================================================

/// Filled accent button for the main action of a panel.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Active => palette.primary.base.color,
        button::Status::Hovered => palette.primary.strong.color,
        button::Status::Pressed => palette.primary.weak.color,
        button::Status::Disabled => palette.background.strong.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outlined neutral button.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => palette.background.weak.color,
        button::Status::Pressed => palette.background.strong.color,
        button::Status::Active | button::Status::Disabled => palette.background.base.color,
    };
    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Borderless button for icons and navigation chevrons.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => Some(palette.background.weak.color.into()),
        button::Status::Pressed => Some(palette.background.strong.color.into()),
        button::Status::Active | button::Status::Disabled => None,
    };
    button::Style {
        background,
        text_color: palette.primary.base.color,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Page tab in the header; the active tab is underlined by its fill.
pub fn tab_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.extended_palette();
        let (background, text_color) = if active {
            (
                Some(palette.primary.weak.color.into()),
                palette.primary.weak.text,
            )
        } else {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    Some(palette.background.weak.color.into())
                }
                button::Status::Active | button::Status::Disabled => None,
            };
            (background, palette.background.base.text)
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Clickable grid cell tinted by its status; the edited cell gets an outline.
pub fn status_cell_button(
    tag: ColorTag,
    editing: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let palette = theme.extended_palette();
        let is_dark = palette.is_dark;
        let mut fill = status_fill(tag, is_dark);
        if matches!(status, button::Status::Hovered | button::Status::Pressed) {
            fill.a = (fill.a * 2.0).min(1.0);
        }
        let border = if editing {
            Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 2.0,
                color: palette.primary.base.color,
            }
        } else {
            Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 1.0,
                color: Color {
                    a: 0.35,
                    ..status_color(tag, is_dark)
                },
            }
        };
        button::Style {
            background: Some(fill.into()),
            text_color: status_color(tag, is_dark),
            border,
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINERS
// =============================================================================

/// Raised card used for the grid, the recap table and dialogs.
pub fn card_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Error banner above the page content.
pub fn banner_container(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.danger.weak.color.into()),
        text_color: Some(palette.danger.weak.text),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: palette.danger.base.color,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT
// =============================================================================

/// Secondary text such as roles and captions.
pub fn muted_text(theme: &Theme) -> text::Style {
    let palette = theme.extended_palette();
    text::Style {
        color: Some(Color {
            a: 0.65,
            ..palette.background.base.text
        }),
    }
}
