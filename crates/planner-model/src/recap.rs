//! Monthly recap: per-employee hours, overtime and next rest day.
//!
//! The figures are supplied with the roster and shown as-is. Changing the
//! selected month relabels the table; it does not filter or recompute the
//! numbers, and weekly grid edits do not flow into the recap.

use serde::{Deserialize, Serialize};

use crate::week::MonthYear;

/// Recap entry for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub hours_worked: f64,
    /// Hours paid at +25%.
    pub overtime_25: f64,
    /// Hours paid at +50%.
    pub overtime_50: f64,
    pub on_leave: bool,
    pub next_rest_day: String,
}


/// One row of the recap table, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecapRow {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub hours_worked: String,
    pub overtime_25: String,
    pub overtime_50: String,
    pub status: &'static str,
    pub next_rest_day: String,
}

/// Column sums of the supplied figures.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecapTotals {
    pub hours_worked: f64,
    pub overtime_25: f64,
    pub overtime_50: f64,
    pub on_leave: usize,
}

/// Read-only recap table for a month selection.
#[derive(Debug, Clone, PartialEq)]
pub struct RecapView {
    pub month: MonthYear,
    pub header: String,
    pub rows: Vec<RecapRow>,
    totals: RecapTotals,
}

impl RecapView {
    pub fn project(employees: &[Employee], month: MonthYear) -> Self {
        let rows = employees
            .iter()
            .map(|e| RecapRow {
                id: e.id,
                name: e.name.clone(),
                role: e.role.clone(),
                hours_worked: format_hours(e.hours_worked),
                overtime_25: format_hours(e.overtime_25),
                overtime_50: format_hours(e.overtime_50),
                status: if e.on_leave { "On leave" } else { "Active" },
                next_rest_day: e.next_rest_day.clone(),
            })
            .collect();

        let totals = employees
            .iter()
            .fold(RecapTotals::default(), |mut acc, e| {
                acc.hours_worked += e.hours_worked;
                acc.overtime_25 += e.overtime_25;
                acc.overtime_50 += e.overtime_50;
                acc.on_leave += usize::from(e.on_leave);
                acc
            });

        Self {
            month,
            header: recap_header(month),
            rows,
            totals,
        }
    }

    pub fn totals(&self) -> RecapTotals {
        self.totals
    }
}

/// `"Recap for month 10 of year 2026"`.
pub fn recap_header(month: MonthYear) -> String {
    format!("Recap for month {} of year {}", month.month(), month.year())
}

/// Hours with at most one decimal: `151`, `7.5`.
pub fn format_hours(hours: f64) -> String {
    let rounded = (hours * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}h")
    } else {
        format!("{rounded:.1}h")
    }
}
