//! GUI-specific error types.
//!
//! Errors travel inside messages, so they are `Clone` and carry display
//! strings rather than source errors.

use planner_model::{RosterError, ScheduleError};
use thiserror::Error;

/// Errors shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // ROSTER
    // =========================================================================
    /// Failed to load the roster (demo seed or roster file).
    #[error("Failed to load roster: {reason}")]
    RosterLoad {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Failed to load settings.
    #[error("Failed to load settings: {reason}")]
    SettingsLoad {
        /// Description of what went wrong.
        reason: String,
    },

    /// Failed to save settings.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // EDITING
    // =========================================================================
    /// A status change was rejected by the schedule store.
    #[error("Could not update status: {reason}")]
    StatusUpdate {
        /// Description of what went wrong.
        reason: String,
    },

    /// Internal error (should not normally occur).
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl GuiError {
    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::RosterLoad { .. } => Some(
                "Check that the roster file named in the settings exists and is valid JSON, then retry.",
            ),
            Self::SettingsLoad { .. } => {
                Some("Settings will be reset to defaults if the file is corrupted.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::StatusUpdate { .. } => Some("Reload the roster and try the change again."),
            Self::Internal { .. } => None,
        }
    }

    /// Whether retrying the failed operation can help.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RosterLoad { .. })
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a roster load error from any error source.
    pub fn roster_load(err: impl std::fmt::Display) -> Self {
        Self::RosterLoad {
            reason: err.to_string(),
        }
    }

    /// Create a settings save error.
    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<RosterError> for GuiError {
    fn from(err: RosterError) -> Self {
        Self::roster_load(err)
    }
}

impl From<ScheduleError> for GuiError {
    fn from(err: ScheduleError) -> Self {
        Self::StatusUpdate {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_errors_are_retryable() {
        let err = GuiError::roster_load("file not found");
        assert!(err.is_retryable());
        assert!(err.suggestion().is_some());
        assert_eq!(err.to_string(), "Failed to load roster: file not found");
    }

    #[test]
    fn schedule_errors_become_status_updates() {
        let err: GuiError = ScheduleError::DayOutOfRange { index: 9 }.into();
        assert!(matches!(err, GuiError::StatusUpdate { .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn roster_errors_keep_the_model_message() {
        let err: GuiError = RosterError::Invalid {
            name: "Ana".into(),
            reason: "empty role".into(),
        }
        .into();
        assert!(err.is_retryable());
        assert_eq!(
            err.to_string(),
            "Failed to load roster: invalid roster entry 'Ana': empty role"
        );
    }

    #[test]
    fn internal_errors_have_no_suggestion() {
        assert_eq!(GuiError::internal("boom").suggestion(), None);
    }
}
