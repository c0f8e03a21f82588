//! Views: pure functions from [`AppState`] to widgets.
//!
//! - [`planning`]: weekly grid and status picker
//! - [`recap`]: monthly recap table
//! - [`loading`]: roster loading and load failure panels

mod loading;
mod planning;
mod recap;

use iced::widget::{button, column, container, row, space, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::error::GuiError;
use crate::message::Message;
use crate::state::{AppState, LoadState, Page};
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, ThemeMode, banner_container, button_ghost, muted_text,
    tab_button,
};

/// Root view.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let content = match &state.load {
        LoadState::Loading => loading::view_loading(state),
        LoadState::Failed(err) => loading::view_load_error(err),
        LoadState::Ready => match state.page {
            Page::Planning => planning::view_planning(state),
            Page::Recap => recap::view_recap(state),
        },
    };

    let mut page = column![view_header(state)].spacing(SPACING_MD);
    if let Some(err) = &state.error {
        page = page.push(view_banner(err));
    }
    page = page.push(content);

    let base: Element<'_, Message> = container(page)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    if state.is_ready() && state.page == Page::Planning {
        planning::with_picker(state, base)
    } else {
        base
    }
}

fn view_header(state: &AppState) -> Element<'_, Message> {
    let tabs = [Page::Planning, Page::Recap]
        .into_iter()
        .fold(row![].spacing(SPACING_SM), |tabs, page| {
            tabs.push(
                button(text(page.label()).size(14))
                    .on_press_maybe(state.is_ready().then_some(Message::Navigate(page)))
                    .padding([6.0, 14.0])
                    .style(tab_button(state.page == page)),
            )
        });

    let mode = state.settings.display.theme_mode;
    let theme_icon = match mode {
        ThemeMode::Light => lucide::moon().size(16),
        ThemeMode::Dark => lucide::sun().size(16),
    };
    let theme_toggle = button(
        row![
            theme_icon,
            text(format!("{} theme", mode.toggled().label())).size(13)
        ]
        .spacing(6.0)
        .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleTheme)
    .padding([6.0, 10.0])
    .style(button_ghost);

    row![
        lucide::calendar_days().size(22),
        text("Regulation Planner").size(22),
        space::horizontal().width(SPACING_LG),
        tabs,
        space::horizontal(),
        theme_toggle,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}

fn view_banner(err: &GuiError) -> Element<'_, Message> {
    let mut message = column![text(err.to_string()).size(14)].spacing(2.0);
    if let Some(suggestion) = err.suggestion() {
        message = message.push(text(suggestion).size(12).style(muted_text));
    }

    container(
        row![
            lucide::circle_alert().size(18),
            message,
            space::horizontal(),
            button(lucide::x().size(16))
                .on_press(Message::DismissError)
                .padding([4.0, 8.0])
                .style(button_ghost),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .width(Length::Fill)
    .style(banner_container)
    .into()
}
