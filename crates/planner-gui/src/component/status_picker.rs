//! Status picker overlay.
//!
//! Drawn over the planning page while the editor is open. Clicking the
//! backdrop or the close button dismisses it without changing anything.

use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, space, stack, text,
};
use iced::{Color, Element, Length, Theme};
use iced_fonts::lucide;
use planner_model::{StatusValue, status_options};

use super::status_badge;
use crate::theme::{
    PICKER_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, button_ghost, button_secondary,
    card_container, muted_text,
};

/// Overlay `base` with a picker listing every status option.
///
/// `current` is highlighted; choosing any option emits `on_select`.
pub fn status_picker<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: String,
    subtitle: String,
    current: StatusValue,
    on_select: impl Fn(StatusValue) -> M,
    on_dismiss: M,
) -> Element<'a, M> {
    let backdrop = mouse_area(
        container(space::horizontal())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.35).into()),
                ..Default::default()
            }),
    )
    .on_press(on_dismiss.clone());

    let header = row![
        column![
            text(title).size(18),
            text(subtitle).size(13).style(muted_text),
        ]
        .spacing(2.0),
        space::horizontal(),
        button(lucide::x().size(18))
            .on_press(on_dismiss)
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    let options = status_options()
        .into_iter()
        .fold(column![].spacing(SPACING_SM), |list, option| {
            let marker: Element<'a, M> = if option.status == current {
                lucide::check().size(14).into()
            } else {
                space::horizontal().width(14.0).into()
            };
            list.push(
                button(
                    row![status_badge(option), space::horizontal(), marker]
                        .align_y(iced::Alignment::Center),
                )
                .on_press(on_select(option.status))
                .width(Length::Fill)
                .padding([SPACING_SM, SPACING_MD])
                .style(button_secondary),
            )
        });

    let dialog = container(column![header, options].spacing(SPACING_MD))
        .width(Length::Fixed(PICKER_WIDTH))
        .padding(SPACING_LG)
        .style(card_container);

    stack![base, opaque(backdrop), center(dialog)].into()
}
