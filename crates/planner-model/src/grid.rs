//! Planning grid projection.
//!
//! [`PlanningGrid::project`] turns the week window, the schedule store and the
//! editor state into plain rows and cells. The GUI draws exactly what this
//! returns, so the shape of the table is testable without a window.

use chrono::NaiveDate;

use crate::editor::StatusEditor;
use crate::schedule::{DAYS_PER_WEEK, ScheduleStore};
use crate::status::{StatusOption, StatusValue};
use crate::week::WeekWindow;

/// Header of one date column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn {
    pub date: NaiveDate,
    /// Abbreviated weekday, e.g. `"Wed"`.
    pub weekday: String,
    /// Day of month with abbreviated month, e.g. `"14 Oct"`.
    pub day: String,
}

impl DayColumn {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weekday: date.format("%a").to_string(),
            day: date.format("%-d %b").to_string(),
        }
    }
}

/// One clickable status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub employee_index: usize,
    pub day_index: usize,
    pub status: StatusValue,
    pub option: StatusOption,
    /// The status picker is open on this cell.
    pub editing: bool,
}

/// One employee's row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub employee_index: usize,
    pub name: String,
    pub role: String,
    /// Days of the week marked as work.
    pub days_on_duty: usize,
    pub cells: [GridCell; DAYS_PER_WEEK],
}

/// Employees × days table for one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanningGrid {
    pub columns: [DayColumn; DAYS_PER_WEEK],
    pub rows: Vec<GridRow>,
}

impl PlanningGrid {
    /// Project the store onto the window. Rows follow store order.
    pub fn project(window: &WeekWindow, store: &ScheduleStore, editor: &StatusEditor) -> Self {
        let columns = window.days.map(DayColumn::new);

        let rows = store
            .schedules()
            .enumerate()
            .map(|(employee_index, schedule)| GridRow {
                employee_index,
                name: schedule.name.clone(),
                role: schedule.role.clone(),
                days_on_duty: schedule.days_on_duty(),
                cells: std::array::from_fn(|day_index| {
                    let status = schedule.schedule[day_index];
                    GridCell {
                        employee_index,
                        day_index,
                        status,
                        option: status.option(),
                        editing: editor.is_open_at(employee_index, day_index),
                    }
                }),
            })
            .collect();

        Self { columns, rows }
    }

    /// The cell whose picker is open, if any.
    pub fn editing_cell(&self) -> Option<&GridCell> {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .find(|cell| cell.editing)
    }

    /// Headcount per status for one day column, in picker order.
    ///
    /// Returns an empty list for a day index outside the week.
    pub fn status_counts(&self, day_index: usize) -> Vec<(StatusValue, usize)> {
        if day_index >= DAYS_PER_WEEK {
            return Vec::new();
        }
        StatusValue::ALL
            .iter()
            .map(|status| {
                let count = self
                    .rows
                    .iter()
                    .filter(|row| row.cells[day_index].status == *status)
                    .count();
                (*status, count)
            })
            .collect()
    }

    /// Number of employees on duty for one day column.
    pub fn on_duty(&self, day_index: usize) -> usize {
        self.rows
            .iter()
            .filter_map(|row| row.cells.get(day_index))
            .filter(|cell| cell.status.is_on_duty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::EmployeeSchedule;
    use chrono::Weekday;
    use StatusValue::{Absent, Rest, Sick, Work};

    fn fixture() -> (WeekWindow, ScheduleStore) {
        let window = WeekWindow::containing(
            NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date"),
            Weekday::Sun,
        );
        let store = ScheduleStore::new(vec![
            EmployeeSchedule::new("Zoe", "Driver", [Work, Work, Rest, Rest, Work, Work, Work]),
            EmployeeSchedule::new(
                "Adam",
                "Regulator",
                [Work, Sick, Sick, Work, Work, Rest, Absent],
            ),
        ]);
        (window, store)
    }

    #[test]
    fn rows_follow_store_order_not_name_order() {
        let (window, store) = fixture();
        let grid = PlanningGrid::project(&window, &store, &StatusEditor::Closed);
        let names: Vec<_> = grid.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Zoe", "Adam"]);
        assert_eq!(grid.rows[0].days_on_duty, 5);
        assert_eq!(grid.rows[1].days_on_duty, 3);
    }

    #[test]
    fn columns_carry_window_dates() {
        let (window, store) = fixture();
        let grid = PlanningGrid::project(&window, &store, &StatusEditor::Closed);
        assert_eq!(grid.columns[0].weekday, "Sun");
        assert_eq!(grid.columns[0].day, "11 Oct");
        assert_eq!(grid.columns[6].date, window.end());
    }

    #[test]
    fn only_the_open_cell_is_marked_editing() {
        let (window, store) = fixture();
        let mut editor = StatusEditor::default();
        editor.open(1, 2);
        let grid = PlanningGrid::project(&window, &store, &editor);

        let editing: Vec<_> = grid
            .rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| c.editing)
            .collect();
        assert_eq!(editing.len(), 1);
        assert_eq!(grid.editing_cell().map(|c| c.status), Some(Sick));
    }

    #[test]
    fn counts_statuses_per_day() {
        let (window, store) = fixture();
        let grid = PlanningGrid::project(&window, &store, &StatusEditor::Closed);
        assert_eq!(grid.on_duty(0), 2);
        assert_eq!(grid.on_duty(2), 0);
        let counts = grid.status_counts(2);
        assert!(counts.contains(&(Rest, 1)));
        assert!(counts.contains(&(Sick, 1)));
        assert!(grid.status_counts(7).is_empty());
    }
}
