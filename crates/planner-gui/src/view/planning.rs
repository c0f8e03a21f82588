//! Weekly planning page.
//!
//! Header row: `[‹] Sun 11 Oct ... Sat 17 Oct [›]`, one row per employee and
//! a per-status headcount under each day. Cells open the status picker.

use iced::widget::{button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;
use planner_model::{DayColumn, DayIndex, GridCell, GridRow, PlanningGrid, status_options};

use crate::component::{nav_button, status_badge, status_picker};
use crate::message::{Message, PlanningMessage};
use crate::state::AppState;
use crate::theme::{
    CELL_HEIGHT, CELL_WIDTH, NAME_WIDTH, NAV_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS,
    button_secondary, card_container, muted_text, status_cell_button,
};

/// Planning page body.
pub fn view_planning(state: &AppState) -> Element<'_, Message> {
    let grid = state.grid();
    let window = state.window();
    let today_column = window.position(state.today);
    // Disabled while the current week is already shown.
    let jump_to_today =
        (!window.contains(state.today)).then_some(Message::Planning(PlanningMessage::Today));

    let toolbar = row![
        nav_button(
            lucide::chevron_left().size(16),
            Message::Planning(PlanningMessage::PreviousMonth)
        ),
        text(state.navigator.month().label()).size(20),
        nav_button(
            lucide::chevron_right().size(16),
            Message::Planning(PlanningMessage::NextMonth)
        ),
        space::horizontal().width(SPACING_MD),
        text(week_range(&grid)).size(14).style(muted_text),
        space::horizontal(),
        button(text("Today").size(13))
            .on_press_maybe(jump_to_today)
            .padding([6.0, 12.0])
            .style(button_secondary),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let legend = status_options()
        .into_iter()
        .fold(row![].spacing(SPACING_SM), |legend, option| {
            legend.push(status_badge(option))
        });

    let mut table = column![header_row(&grid.columns, today_column)].spacing(SPACING_XS);
    if grid.rows.is_empty() {
        table = table.push(
            container(text("This roster has no weekly schedules.").style(muted_text))
                .padding(SPACING_MD),
        );
    }
    let footer = footer_row(&grid);
    for grid_row in grid.rows {
        table = table.push(body_row(grid_row));
    }
    table = table.push(footer);

    let mut page = column![
        toolbar,
        legend,
        container(scrollable(table))
            .padding(SPACING_MD)
            .style(card_container),
    ]
    .spacing(SPACING_MD);

    if let Some(note) = last_change_note(state) {
        page = page.push(text(note).size(12).style(muted_text));
    }
    page.into()
}

/// Overlay the status picker when a cell is being edited.
pub fn with_picker<'a>(state: &'a AppState, base: Element<'a, Message>) -> Element<'a, Message> {
    let Some((employee_index, day_index)) = state.editor.target() else {
        return base;
    };
    let (Some(schedule), Some(current)) = (
        state.store.schedule(employee_index),
        state.store.get(employee_index, day_index),
    ) else {
        return base;
    };
    let date = state.window().days[day_index];

    status_picker(
        base,
        schedule.name.clone(),
        format!(
            "{}, currently {}",
            date.format("%A %-d %B"),
            current.label()
        ),
        current,
        |status| Message::Planning(PlanningMessage::StatusSelected(status)),
        Message::Planning(PlanningMessage::PickerDismissed),
    )
}

fn header_row(columns: &[DayColumn], today_column: Option<usize>) -> Element<'static, Message> {
    let mut days = row![].spacing(SPACING_XS);
    for (index, day) in columns.iter().enumerate() {
        let is_today = today_column == Some(index);
        days = days.push(
            container(
                column![
                    text(day.weekday.clone())
                        .size(12)
                        .style(move |theme: &Theme| day_text(theme, is_today)),
                    text(day.day.clone())
                        .size(14)
                        .style(move |theme: &Theme| day_text(theme, is_today)),
                ]
                .align_x(Alignment::Center),
            )
            .center_x(Length::Fixed(CELL_WIDTH)),
        );
    }

    row![
        container(text("Employee").size(13).style(muted_text)).width(Length::Fixed(NAME_WIDTH)),
        container(nav_button(
            lucide::chevron_left().size(16),
            Message::Planning(PlanningMessage::PreviousWeek)
        ))
        .center_x(Length::Fixed(NAV_WIDTH)),
        days,
        container(nav_button(
            lucide::chevron_right().size(16),
            Message::Planning(PlanningMessage::NextWeek)
        ))
        .center_x(Length::Fixed(NAV_WIDTH)),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .into()
}

fn body_row(grid_row: GridRow) -> Element<'static, Message> {
    let cells = grid_row
        .cells
        .iter()
        .fold(row![].spacing(SPACING_XS), |cells, cell| {
            cells.push(status_cell(cell))
        });

    row![
        column![
            text(grid_row.name).size(14),
            text(format!("{}, {}", grid_row.role, duty_days(grid_row.days_on_duty)))
                .size(12)
                .style(muted_text),
        ]
        .width(Length::Fixed(NAME_WIDTH)),
        space::horizontal().width(NAV_WIDTH),
        cells,
        space::horizontal().width(NAV_WIDTH),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center)
    .into()
}

fn status_cell(cell: &GridCell) -> Element<'static, Message> {
    button(container(text(cell.option.label).size(13)).center(Length::Fill))
        .on_press(Message::Planning(PlanningMessage::CellClicked {
            employee_index: cell.employee_index,
            day_index: cell.day_index,
        }))
        .width(Length::Fixed(CELL_WIDTH))
        .height(Length::Fixed(CELL_HEIGHT))
        .padding(0)
        .style(status_cell_button(cell.option.color, cell.editing))
        .into()
}

fn footer_row(grid: &PlanningGrid) -> Element<'static, Message> {
    let counts = DayIndex::all().fold(row![].spacing(SPACING_XS), |counts, day| {
        let lines = day_counts(grid, day)
            .into_iter()
            .fold(column![].align_x(Alignment::Center), |lines, line| {
                lines.push(text(line).size(12).style(muted_text))
            });
        counts.push(container(lines).center_x(Length::Fixed(CELL_WIDTH)))
    });

    row![
        space::horizontal().width(NAME_WIDTH),
        space::horizontal().width(NAV_WIDTH),
        counts,
        space::horizontal().width(NAV_WIDTH),
    ]
    .spacing(SPACING_XS)
    .into()
}

/// Footer lines for one day: the on-duty headcount, then every other
/// status present that day.
fn day_counts(grid: &PlanningGrid, day: DayIndex) -> Vec<String> {
    let mut lines = vec![format!("{} on duty", grid.on_duty(day.get()))];
    lines.extend(
        grid.status_counts(day.get())
            .into_iter()
            .filter(|(status, count)| !status.is_on_duty() && *count > 0)
            .map(|(status, count)| format!("{count} {}", status.label())),
    );
    lines
}

fn duty_days(days: usize) -> String {
    match days {
        1 => "1 day on duty".to_string(),
        n => format!("{n} days on duty"),
    }
}

fn day_text(theme: &Theme, is_today: bool) -> text::Style {
    if is_today {
        text::Style {
            color: Some(theme.extended_palette().primary.base.color),
        }
    } else {
        text::Style::default()
    }
}

/// `"11 Oct - 17 Oct 2026"`.
fn week_range(grid: &PlanningGrid) -> String {
    let first = grid.columns[0].date;
    let last = grid.columns[grid.columns.len() - 1].date;
    format!("{} - {}", first.format("%-d %b"), last.format("%-d %b %Y"))
}

fn last_change_note(state: &AppState) -> Option<String> {
    let change = state.last_change?;
    let schedule = state.store.schedule(change.employee_index)?;
    Some(format!(
        "Last change: {} on day {} of the week, {} to {}",
        schedule.name,
        change.day_index + 1,
        change.previous.label(),
        change.status.label()
    ))
}
