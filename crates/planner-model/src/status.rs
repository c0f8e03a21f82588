//! Work-status vocabulary for the planning grid.
//!
//! Every schedule cell holds exactly one [`StatusValue`]. The set is closed,
//! and each value maps to exactly one [`StatusOption`] carrying its display
//! label and color tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Work-day classification of one employee on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusValue {
    /// On duty.
    #[default]
    Work,
    /// Unplanned absence.
    Absent,
    /// Scheduled rest day.
    Rest,
    /// Paid leave.
    Leave,
    /// Sick leave.
    Sick,
}

impl StatusValue {
    /// All statuses in picker order.
    pub const ALL: [StatusValue; 5] = [
        StatusValue::Work,
        StatusValue::Absent,
        StatusValue::Rest,
        StatusValue::Leave,
        StatusValue::Sick,
    ];

    /// Returns the serialized key (`"work"`, `"absent"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusValue::Work => "work",
            StatusValue::Absent => "absent",
            StatusValue::Rest => "rest",
            StatusValue::Leave => "leave",
            StatusValue::Sick => "sick",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        self.option().label
    }

    /// Returns the color tag used to paint the cell.
    pub fn color(&self) -> ColorTag {
        self.option().color
    }

    /// Returns the display metadata for this status.
    pub fn option(&self) -> StatusOption {
        let (label, color) = match self {
            StatusValue::Work => ("Work", ColorTag::Green),
            StatusValue::Absent => ("Absent", ColorTag::Red),
            StatusValue::Rest => ("Rest", ColorTag::Blue),
            StatusValue::Leave => ("Leave", ColorTag::Orange),
            StatusValue::Sick => ("Sick", ColorTag::Purple),
        };
        StatusOption {
            status: *self,
            label,
            color,
        }
    }

    /// Whether the employee is available for dispatch on this day.
    pub fn is_on_duty(&self) -> bool {
        matches!(self, StatusValue::Work)
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StatusValue {
    type Err = String;

    /// Parse a status key, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "work" => Ok(StatusValue::Work),
            "absent" => Ok(StatusValue::Absent),
            "rest" => Ok(StatusValue::Rest),
            "leave" => Ok(StatusValue::Leave),
            "sick" => Ok(StatusValue::Sick),
            _ => Err(format!("Unknown work status: {s}")),
        }
    }
}

/// Color family a status is painted with.
///
/// The GUI resolves each tag to a concrete color for the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Green,
    Red,
    Blue,
    Orange,
    Purple,
}

/// Display metadata for a [`StatusValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOption {
    pub status: StatusValue,
    pub label: &'static str,
    pub color: ColorTag,
}

/// Display metadata for every status, in picker order.
pub fn status_options() -> [StatusOption; 5] {
    StatusValue::ALL.map(|status| status.option())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_status_has_a_distinct_color() {
        let colors: HashSet<ColorTag> = StatusValue::ALL.iter().map(StatusValue::color).collect();
        assert_eq!(colors.len(), StatusValue::ALL.len());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Leave".parse::<StatusValue>(), Ok(StatusValue::Leave));
        assert_eq!(" SICK ".parse::<StatusValue>(), Ok(StatusValue::Sick));
        assert!("holiday".parse::<StatusValue>().is_err());
    }

    #[test]
    fn serializes_lowercase_keys() {
        let json = serde_json::to_string(&StatusValue::Absent).expect("serialize status");
        assert_eq!(json, "\"absent\"");
        for status in StatusValue::ALL {
            assert_eq!(status.as_str().parse::<StatusValue>(), Ok(status));
        }
    }

    #[test]
    fn options_follow_picker_order() {
        let options = status_options();
        assert_eq!(options[0].label, "Work");
        assert_eq!(options[4].status, StatusValue::Sick);
    }
}
