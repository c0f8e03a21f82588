//! Chevron navigation button.

use iced::widget::{button, container};
use iced::{Element, Length};

use crate::theme::button_ghost;

/// Square ghost button around an icon.
pub fn nav_button<'a, M: Clone + 'a>(
    icon: impl Into<Element<'a, M>>,
    on_press: M,
) -> Element<'a, M> {
    button(container(icon).center(Length::Fill))
        .on_press(on_press)
        .width(Length::Fixed(32.0))
        .height(Length::Fixed(32.0))
        .padding(0)
        .style(button_ghost)
        .into()
}
