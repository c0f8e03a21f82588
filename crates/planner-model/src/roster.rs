//! Roster data: the schedules and recap entries the planner starts from.
//!
//! A roster comes either from the built-in demo set or from a JSON file:
//!
//! ```json
//! {
//!   "schedules": [
//!     { "name": "Sophie Martin", "role": "Regulator",
//!       "schedule": ["work", "work", "rest", "rest", "work", "work", "leave"] }
//!   ],
//!   "employees": [
//!     { "id": 1, "name": "Sophie Martin", "role": "Regulator",
//!       "hours_worked": 151, "overtime_25": 6, "overtime_50": 2,
//!       "on_leave": false, "next_rest_day": "Tuesday" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::recap::Employee;
use crate::schedule::{EmployeeSchedule, ScheduleStore};
use crate::status::StatusValue;

/// Schedules plus recap entries, as loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub schedules: Vec<EmployeeSchedule>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Roster {
    /// Parse and validate a JSON roster.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let roster: Roster = serde_json::from_str(content)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Read, parse and validate a JSON roster file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let roster = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            schedules = roster.schedules.len(),
            employees = roster.employees.len(),
            "Loaded roster file"
        );
        Ok(roster)
    }

    /// Reject entries the planner cannot display.
    pub fn validate(&self) -> Result<()> {
        for schedule in &self.schedules {
            if schedule.name.trim().is_empty() {
                return Err(RosterError::Invalid {
                    name: schedule.role.clone(),
                    reason: "schedule has an empty name".to_string(),
                });
            }
        }

        for employee in &self.employees {
            let figures = [
                ("hours_worked", employee.hours_worked),
                ("overtime_25", employee.overtime_25),
                ("overtime_50", employee.overtime_50),
            ];
            if let Some((field, value)) = figures
                .iter()
                .find(|(_, value)| !value.is_finite() || *value < 0.0)
            {
                return Err(RosterError::Invalid {
                    name: employee.name.clone(),
                    reason: format!("{field} must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Recap names with no schedule of the same name.
    ///
    /// Schedules and recap entries are only linked by name, so a typo in
    /// either list silently splits one person in two.
    pub fn unmatched_recap_names(&self) -> Vec<&str> {
        let store = self.store();
        self.employees
            .iter()
            .filter(|e| store.find_by_name(&e.name).is_none())
            .map(|e| e.name.as_str())
            .collect()
    }

    /// Build the schedule store from this roster's schedules.
    pub fn store(&self) -> ScheduleStore {
        ScheduleStore::new(self.schedules.clone())
    }

    /// Built-in demo roster for a regulation team.
    pub fn demo() -> Self {
        use StatusValue::{Absent, Leave, Rest, Sick, Work};

        let schedules = vec![
            EmployeeSchedule::new(
                "Sophie Martin",
                "Regulator",
                [Rest, Work, Work, Work, Work, Work, Rest],
            ),
            EmployeeSchedule::new(
                "Lucas Bernard",
                "Ambulance driver",
                [Work, Work, Work, Rest, Rest, Work, Work],
            ),
            EmployeeSchedule::new(
                "Emma Petit",
                "Paramedic",
                [Work, Leave, Leave, Leave, Leave, Leave, Rest],
            ),
            EmployeeSchedule::new(
                "Hugo Moreau",
                "Dispatcher",
                [Work, Work, Sick, Sick, Work, Absent, Rest],
            ),
            EmployeeSchedule::new(
                "Chloe Laurent",
                "Transport driver",
                [Rest, Rest, Work, Work, Work, Work, Work],
            ),
        ];

        let employees = vec![
            demo_employee(1, "Sophie Martin", "Regulator", 151.0, 6.0, 2.0, false, "Saturday"),
            demo_employee(
                2,
                "Lucas Bernard",
                "Ambulance driver",
                162.5,
                10.0,
                4.5,
                false,
                "Wednesday",
            ),
            demo_employee(3, "Emma Petit", "Paramedic", 84.0, 0.0, 0.0, true, "Saturday"),
            demo_employee(4, "Hugo Moreau", "Dispatcher", 128.0, 2.0, 0.0, false, "Saturday"),
            demo_employee(5, "Chloe Laurent", "Transport driver", 140.0, 4.0, 1.0, false, "Sunday"),
        ];

        Self {
            schedules,
            employees,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_employee(
    id: u32,
    name: &str,
    role: &str,
    hours_worked: f64,
    overtime_25: f64,
    overtime_50: f64,
    on_leave: bool,
    next_rest_day: &str,
) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        role: role.to_string(),
        hours_worked,
        overtime_25,
        overtime_50,
        on_leave,
        next_rest_day: next_rest_day.to_string(),
    }
}
