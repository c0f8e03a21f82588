//! Monthly recap page.

use iced::widget::{column, container, row, rule, scrollable, space, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;
use planner_model::{RecapRow, RecapTotals, format_hours};

use crate::component::nav_button;
use crate::message::{Message, RecapMessage};
use crate::state::AppState;
use crate::theme::{SPACING_MD, SPACING_SM, card_container, muted_text};

const COLUMNS: [(&str, u16); 7] = [
    ("Name", 3),
    ("Role", 3),
    ("Hours worked", 2),
    ("Overtime 25%", 2),
    ("Overtime 50%", 2),
    ("Status", 2),
    ("Next rest day", 2),
];

/// Recap page body.
pub fn view_recap(state: &AppState) -> Element<'_, Message> {
    let recap = state.recap();

    let toolbar = row![
        nav_button(
            lucide::chevron_left().size(16),
            Message::Recap(RecapMessage::PreviousMonth)
        ),
        text(recap.header.clone()).size(20),
        nav_button(
            lucide::chevron_right().size(16),
            Message::Recap(RecapMessage::NextMonth)
        ),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let header = COLUMNS
        .iter()
        .fold(row![].spacing(SPACING_SM), |header, (label, portion)| {
            header.push(
                text(*label)
                    .size(13)
                    .style(muted_text)
                    .width(Length::FillPortion(*portion)),
            )
        });

    let mut table = column![header, rule::horizontal(1)].spacing(SPACING_SM);
    if recap.rows.is_empty() {
        table = table.push(text("This roster has no recap figures.").style(muted_text));
    }
    let totals = totals_row(recap.totals());
    for recap_row in recap.rows {
        table = table.push(body_row(recap_row));
    }
    table = table.push(rule::horizontal(1)).push(totals);

    column![
        toolbar,
        container(scrollable(table))
            .padding(SPACING_MD)
            .style(card_container),
        text("Figures come with the roster; editing the weekly grid does not change them.")
            .size(12)
            .style(muted_text),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn body_row(recap_row: RecapRow) -> Element<'static, Message> {
    let cells = [
        recap_row.name,
        recap_row.role,
        recap_row.hours_worked,
        recap_row.overtime_25,
        recap_row.overtime_50,
        recap_row.status.to_string(),
        recap_row.next_rest_day,
    ];
    cells
        .into_iter()
        .zip(COLUMNS)
        .fold(row![].spacing(SPACING_SM), |cells, (value, (_, portion))| {
            cells.push(text(value).size(14).width(Length::FillPortion(portion)))
        })
        .into()
}

fn totals_row(totals: RecapTotals) -> Element<'static, Message> {
    let portion = |index: usize| Length::FillPortion(COLUMNS[index].1);
    row![
        text("Total").size(14).width(portion(0)),
        space::horizontal().width(portion(1)),
        text(format_hours(totals.hours_worked)).size(14).width(portion(2)),
        text(format_hours(totals.overtime_25)).size(14).width(portion(3)),
        text(format_hours(totals.overtime_50)).size(14).width(portion(4)),
        text(format!("{} on leave", totals.on_leave))
            .size(14)
            .width(portion(5)),
        space::horizontal().width(portion(6)),
    ]
    .spacing(SPACING_SM)
    .into()
}
