//! Roster model for the regulation planner.
//!
//! Pure, GUI-free building blocks of the weekly planning grid:
//!
//! - [`status`]: the closed work-status vocabulary and its display metadata
//! - [`schedule`]: per-employee weekly schedules and the copy-on-write store
//! - [`week`]: week-start arithmetic, week windows and month selection
//! - [`editor`]: which single grid cell has its status picker open
//! - [`grid`]: projection of the store onto a week as rows and cells
//! - [`recap`]: read-only monthly recap table
//! - [`roster`]: demo data and JSON roster files

pub mod editor;
pub mod error;
pub mod grid;
pub mod recap;
pub mod roster;
pub mod schedule;
pub mod status;
pub mod week;

pub use editor::StatusEditor;
pub use error::{Result, RosterError, ScheduleError};
pub use grid::{DayColumn, GridCell, GridRow, PlanningGrid};
pub use recap::{Employee, RecapRow, RecapTotals, RecapView, format_hours, recap_header};
pub use roster::Roster;
pub use schedule::{DAYS_PER_WEEK, DayIndex, EmployeeSchedule, ScheduleStore, StatusChange};
pub use status::{ColorTag, StatusOption, StatusValue, status_options};
pub use week::{
    DEFAULT_ANCHOR, MonthYear, WeekNavigator, WeekWindow, start_of_week, supported_range,
    week_days,
};
