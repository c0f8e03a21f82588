//! Roster loading and load failure panels.

use iced::widget::{button, center, column, row, text};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use crate::error::GuiError;
use crate::message::Message;
use crate::service::RosterSource;
use crate::state::AppState;
use crate::theme::{SPACING_MD, SPACING_SM, button_primary, muted_text};

/// Shown while the roster load is in flight.
pub fn view_loading(state: &AppState) -> Element<'_, Message> {
    let source = match state.settings.planning.roster_source() {
        RosterSource::Demo => "Demo roster".to_string(),
        RosterSource::File(path) => path.display().to_string(),
    };

    center(
        column![
            lucide::loader().size(40),
            text("Loading roster...").size(18),
            text(source).size(13).style(muted_text),
        ]
        .spacing(SPACING_MD)
        .align_x(Alignment::Center),
    )
    .into()
}

/// Shown when the roster load failed; offers a retry.
pub fn view_load_error(err: &GuiError) -> Element<'_, Message> {
    let mut body = column![
        lucide::circle_alert().size(48),
        text("Could not load the roster").size(18),
        text(err.to_string()).size(14),
    ]
    .spacing(SPACING_MD)
    .align_x(Alignment::Center);

    if let Some(suggestion) = err.suggestion() {
        body = body.push(text(suggestion).size(13).style(muted_text));
    }

    if err.is_retryable() {
        body = body.push(
            button(
                row![lucide::refresh_cw().size(14), text("Retry").size(14)]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
            )
            .on_press(Message::RetryLoad)
            .padding([8.0, 16.0])
            .style(button_primary),
        );
    }

    center(body).into()
}
