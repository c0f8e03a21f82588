//! Status editor: which single grid cell, if any, has its picker open.

use crate::error::ScheduleError;
use crate::schedule::{ScheduleStore, StatusChange};
use crate::status::StatusValue;

/// Picker state of the planning grid.
///
/// There is no way to represent two open cells at once: opening a cell
/// replaces whatever was open before.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusEditor {
    #[default]
    Closed,
    Open {
        employee_index: usize,
        day_index: usize,
    },
}

impl StatusEditor {
    /// Open the picker on `(employee_index, day_index)`.
    ///
    /// A previously open cell is abandoned without writing anything.
    pub fn open(&mut self, employee_index: usize, day_index: usize) {
        if let StatusEditor::Open {
            employee_index: e,
            day_index: d,
        } = *self
            && (e, d) != (employee_index, day_index)
        {
            tracing::trace!(employee = e, day = d, "Abandoned open status picker");
        }
        *self = StatusEditor::Open {
            employee_index,
            day_index,
        };
    }

    /// Close the picker without selecting anything.
    pub fn dismiss(&mut self) {
        *self = StatusEditor::Closed;
    }

    /// Commit `status` to the open cell, then close.
    ///
    /// Returns `None` when no cell is open. The editor closes even when the
    /// store rejects the coordinate.
    pub fn select(
        &mut self,
        status: StatusValue,
        store: &mut ScheduleStore,
    ) -> Option<Result<StatusChange, ScheduleError>> {
        let (employee_index, day_index) = self.target()?;
        let result = store.update_status(employee_index, day_index, status);
        *self = StatusEditor::Closed;
        Some(result)
    }

    /// Coordinate of the open cell.
    pub fn target(&self) -> Option<(usize, usize)> {
        match *self {
            StatusEditor::Closed => None,
            StatusEditor::Open {
                employee_index,
                day_index,
            } => Some((employee_index, day_index)),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, StatusEditor::Open { .. })
    }

    pub fn is_open_at(&self, employee_index: usize, day_index: usize) -> bool {
        self.target() == Some((employee_index, day_index))
    }
}
