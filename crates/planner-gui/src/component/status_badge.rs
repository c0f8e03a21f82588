//! Status badge component.
//!
//! A pill showing a status label in its status color.

use iced::widget::{container, text};
use iced::{Border, Element, Theme};
use planner_model::StatusOption;

use crate::theme::{BORDER_RADIUS_FULL, status_color, status_fill};

/// Creates a pill-shaped badge for a status option.
pub fn status_badge<'a, M: 'a>(option: StatusOption) -> Element<'a, M> {
    let tag = option.color;

    container(text(option.label).size(12).style(move |theme: &Theme| {
        text::Style {
            color: Some(status_color(tag, theme.extended_palette().is_dark)),
        }
    }))
    .padding([4.0, 10.0])
    .style(move |theme: &Theme| container::Style {
        background: Some(status_fill(tag, theme.extended_palette().is_dark).into()),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
