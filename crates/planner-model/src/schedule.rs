//! Per-employee weekly schedules and the store that owns them.
//!
//! The store is copy-on-write: [`ScheduleStore::update_status`] builds a new
//! collection in which only the edited employee's schedule is a new
//! allocation. Every other schedule keeps its `Arc` identity, so observers
//! holding an older [`ScheduleStore::snapshot`] can tell exactly what changed
//! by pointer comparison.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::status::StatusValue;

/// Number of day slots in a weekly schedule.
pub const DAYS_PER_WEEK: usize = 7;

/// A day offset inside the displayed week, always in `0..7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayIndex(u8);

impl DayIndex {
    /// Returns `None` when `index` is outside the week.
    pub fn new(index: usize) -> Option<Self> {
        (index < DAYS_PER_WEEK).then_some(Self(index as u8))
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// All seven day offsets in order.
    pub fn all() -> impl Iterator<Item = DayIndex> {
        (0..DAYS_PER_WEEK as u8).map(DayIndex)
    }
}

impl TryFrom<usize> for DayIndex {
    type Error = ScheduleError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        DayIndex::new(index).ok_or(ScheduleError::DayOutOfRange { index })
    }
}

/// One employee's statuses for the seven days of the displayed week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSchedule {
    pub name: String,
    pub role: String,
    pub schedule: [StatusValue; DAYS_PER_WEEK],
}

impl EmployeeSchedule {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        schedule: [StatusValue; DAYS_PER_WEEK],
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            schedule,
        }
    }

    /// Status on the given day.
    pub fn status(&self, day: DayIndex) -> StatusValue {
        self.schedule[day.get()]
    }

    /// Number of days marked as [`StatusValue::Work`].
    pub fn days_on_duty(&self) -> usize {
        self.schedule.iter().filter(|s| s.is_on_duty()).count()
    }
}

/// Record of a single committed cell edit.
///
/// This is what the planner hands to whoever listens for status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub employee_index: usize,
    pub day_index: usize,
    pub previous: StatusValue,
    pub status: StatusValue,
}

impl StatusChange {
    /// Whether the edit actually replaced the cell with a different value.
    pub fn is_noop(&self) -> bool {
        self.previous == self.status
    }
}

/// Ordered collection of employee schedules.
///
/// Order is significant: it is the display order of the planning grid.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    schedules: Arc<[Arc<EmployeeSchedule>]>,
    revision: u64,
}

impl Default for ScheduleStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ScheduleStore {
    pub fn new(schedules: Vec<EmployeeSchedule>) -> Self {
        Self {
            schedules: schedules.into_iter().map(Arc::new).collect(),
            revision: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Counter bumped by every successful [`update_status`](Self::update_status).
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Iterate schedules in store order.
    pub fn schedules(&self) -> impl Iterator<Item = &EmployeeSchedule> {
        self.schedules.iter().map(AsRef::as_ref)
    }

    pub fn schedule(&self, employee_index: usize) -> Option<&EmployeeSchedule> {
        self.schedules.get(employee_index).map(AsRef::as_ref)
    }

    /// Status at `(employee_index, day_index)`, if both are in range.
    pub fn get(&self, employee_index: usize, day_index: usize) -> Option<StatusValue> {
        let day = DayIndex::new(day_index)?;
        self.schedule(employee_index).map(|s| s.status(day))
    }

    /// Shared handle on the current collection.
    ///
    /// A snapshot never changes; later edits produce a new collection.
    pub fn snapshot(&self) -> Arc<[Arc<EmployeeSchedule>]> {
        Arc::clone(&self.schedules)
    }

    /// Index of the first schedule whose name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.schedules
            .iter()
            .position(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Replace the status at exactly one `(employee_index, day_index)` slot.
    ///
    /// Every other slot keeps its value and every other employee keeps its
    /// schedule allocation. Writing the value already present succeeds and
    /// leaves the observable state unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if either index is out of range; the store is
    /// not modified in that case.
    pub fn update_status(
        &mut self,
        employee_index: usize,
        day_index: usize,
        status: StatusValue,
    ) -> Result<StatusChange, ScheduleError> {
        let day = DayIndex::try_from(day_index)?;
        let current = self
            .schedules
            .get(employee_index)
            .ok_or(ScheduleError::EmployeeOutOfRange {
                index: employee_index,
                len: self.schedules.len(),
            })?;

        let previous = current.status(day);
        let mut edited = EmployeeSchedule::clone(current);
        edited.schedule[day.get()] = status;
        let edited = Arc::new(edited);

        self.schedules = self
            .schedules
            .iter()
            .enumerate()
            .map(|(index, schedule)| {
                if index == employee_index {
                    Arc::clone(&edited)
                } else {
                    Arc::clone(schedule)
                }
            })
            .collect();
        self.revision += 1;

        tracing::debug!(
            employee = employee_index,
            day = day_index,
            from = previous.as_str(),
            to = status.as_str(),
            revision = self.revision,
            "Updated schedule cell"
        );

        Ok(StatusChange {
            employee_index,
            day_index,
            previous,
            status,
        })
    }
}
