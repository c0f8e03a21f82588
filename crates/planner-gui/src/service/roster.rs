//! Roster loading service.
//!
//! Stands in for a remote fetch: waits the configured delay, then reads the
//! built-in demo roster or a JSON roster file on a blocking thread.

use std::path::PathBuf;
use std::time::Duration;

use planner_model::Roster;

use crate::error::GuiError;

/// Where the roster comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// Built-in demo roster.
    Demo,
    /// JSON roster file.
    File(PathBuf),
}

/// Load the roster after `delay`.
///
/// Runs inside `Task::perform`; the result comes back as
/// `Message::RosterLoaded`.
pub async fn load_roster(source: RosterSource, delay: Duration) -> Result<Roster, GuiError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let roster = match source {
        RosterSource::Demo => Roster::demo(),
        RosterSource::File(path) => {
            let read = tokio::task::spawn_blocking(move || Roster::from_path(&path));
            read.await
                .map_err(|e| GuiError::internal(format!("Roster reader panicked: {e}")))??
        }
    };

    for name in roster.unmatched_recap_names() {
        tracing::warn!(name, "Recap entry has no weekly schedule");
    }
    tracing::info!(
        schedules = roster.schedules.len(),
        employees = roster.employees.len(),
        "Roster ready"
    );
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_source_yields_demo_roster() {
        let roster = load_roster(RosterSource::Demo, Duration::ZERO)
            .await
            .expect("demo roster");
        assert_eq!(roster, Roster::demo());
    }

    #[tokio::test]
    async fn file_source_reads_json() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("roster.json");
        std::fs::write(
            &path,
            r#"{ "schedules": [ { "name": "Ana", "role": "Regulator",
                 "schedule": ["work", "rest", "rest", "work", "work", "work", "leave"] } ] }"#,
        )
        .expect("write roster");

        let roster = load_roster(RosterSource::File(path), Duration::ZERO)
            .await
            .expect("file roster");
        assert_eq!(roster.schedules.len(), 1);
        assert!(roster.employees.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_a_roster_load_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = load_roster(
            RosterSource::File(dir.path().join("absent.json")),
            Duration::ZERO,
        )
        .await
        .expect_err("missing file");
        assert!(matches!(err, GuiError::RosterLoad { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[tokio::test]
    async fn blank_schedule_name_is_a_roster_load_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("roster.json");
        std::fs::write(
            &path,
            r#"{ "schedules": [ { "name": "  ", "role": "Regulator",
                 "schedule": ["work", "rest", "rest", "work", "work", "work", "leave"] } ] }"#,
        )
        .expect("write roster");

        let err = load_roster(RosterSource::File(path), Duration::ZERO)
            .await
            .expect_err("blank name");
        assert!(matches!(err, GuiError::RosterLoad { .. }));
        assert!(err.to_string().contains("invalid roster entry"));
    }

    #[tokio::test]
    async fn invalid_json_is_a_roster_load_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("roster.json");
        std::fs::write(&path, "{ not json").expect("write roster");

        let err = load_roster(RosterSource::File(path), Duration::ZERO)
            .await
            .expect_err("bad json");
        assert!(err.is_retryable());
    }
}
