//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Weekday;
use planner_model::DEFAULT_ANCHOR;
use serde::{Deserialize, Serialize};

use crate::error::GuiError;
use crate::service::roster::RosterSource;
use crate::theme::ThemeMode;

/// Simulated fetch latency used when nothing is configured.
pub const DEFAULT_LOAD_DELAY_MS: u64 = 1000;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display settings.
    pub display: DisplaySettings,

    /// Planning grid and roster settings.
    pub planning: PlanningSettings,
}

impl Settings {
    /// Load settings from a specific path.
    ///
    /// A missing file yields the defaults; an unreadable or corrupt one is
    /// an error.
    pub fn try_load_from(path: &Path) -> Result<Self, GuiError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(GuiError::SettingsLoad {
                    reason: format!("{}: {err}", path.display()),
                });
            }
        };
        toml::from_str(&content).map_err(|err| GuiError::SettingsLoad {
            reason: format!("{}: {err}", path.display()),
        })
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GuiError::settings_save(format!("Failed to create config directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| GuiError::settings_save(format!("Failed to serialize settings: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| GuiError::settings_save(format!("Failed to write settings: {e}")))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "RegulationPlanner", "regulation-planner")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Display settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Light or dark theme.
    pub theme_mode: ThemeMode,
}

/// Planning grid and roster settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningSettings {
    /// First day of the displayed week.
    pub week_anchor: Weekday,

    /// Simulated latency before the roster becomes available.
    pub load_delay_ms: u64,

    /// JSON roster file; the built-in demo roster when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster_path: Option<PathBuf>,
}

impl Default for PlanningSettings {
    fn default() -> Self {
        Self {
            week_anchor: DEFAULT_ANCHOR,
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            roster_path: None,
        }
    }
}

impl PlanningSettings {
    /// Simulated load delay as a duration.
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    /// Where the roster comes from.
    pub fn roster_source(&self) -> RosterSource {
        match &self.roster_path {
            Some(path) => RosterSource::File(path.clone()),
            None => RosterSource::Demo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_sunday_and_demo_roster() {
        let settings = Settings::default();
        assert_eq!(settings.planning.week_anchor, Weekday::Sun);
        assert_eq!(settings.planning.load_delay(), Duration::from_secs(1));
        assert_eq!(settings.planning.roster_source(), RosterSource::Demo);
        assert_eq!(settings.display.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.display.theme_mode = ThemeMode::Dark;
        settings.planning.week_anchor = Weekday::Mon;
        settings.planning.load_delay_ms = 0;
        settings.planning.roster_path = Some(PathBuf::from("/tmp/roster.json"));
        settings.save_to(&path).expect("save settings");

        assert_eq!(Settings::try_load_from(&path).expect("load"), settings);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let loaded = Settings::try_load_from(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn corrupt_file_is_a_settings_load_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "display = [unterminated").expect("write");

        let err = Settings::try_load_from(&path).expect_err("corrupt");
        assert!(matches!(err, GuiError::SettingsLoad { .. }));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[planning]\nweek_anchor = \"Mon\"\n").expect("write");

        let loaded = Settings::try_load_from(&path).expect("load");
        assert_eq!(loaded.planning.week_anchor, Weekday::Mon);
        assert_eq!(loaded.planning.load_delay_ms, DEFAULT_LOAD_DELAY_MS);
        assert_eq!(loaded.display.theme_mode, ThemeMode::Light);
    }
}
