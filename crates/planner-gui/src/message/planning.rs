//! Planning grid messages.

use planner_model::StatusValue;

/// Messages emitted by the planning page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanningMessage {
    /// Show the week before the current one.
    PreviousWeek,
    /// Show the week after the current one.
    NextWeek,
    /// Jump to the same day of the previous month.
    PreviousMonth,
    /// Jump to the same day of the next month.
    NextMonth,
    /// Return to the week containing today.
    Today,
    /// A status cell was clicked; opens the status picker for it.
    CellClicked {
        employee_index: usize,
        day_index: usize,
    },
    /// A status was chosen in the open picker.
    StatusSelected(StatusValue),
    /// The picker was closed without choosing.
    PickerDismissed,
}
