//! Roster loading.
//!
//! A load is started at boot and on retry. Each load gets a generation number
//! and its result is applied only if no newer load has started since.

use iced::Task;
use planner_model::Roster;

use crate::error::GuiError;
use crate::message::Message;
use crate::service::load_roster;
use crate::state::{AppState, LoadState};

/// Start a background load using the current settings.
pub fn start_load(state: &mut AppState) -> Task<Message> {
    let generation = state.begin_load();
    let source = state.settings.planning.roster_source();
    let delay = state.settings.planning.load_delay();
    tracing::info!(
        generation,
        ?source,
        delay_ms = state.settings.planning.load_delay_ms,
        "Loading roster"
    );

    Task::perform(load_roster(source, delay), move |result| {
        Message::RosterLoaded { generation, result }
    })
}

/// Apply the result of the load identified by `generation`.
pub fn finish_load(
    state: &mut AppState,
    generation: u64,
    result: Result<Roster, GuiError>,
) -> Task<Message> {
    if generation != state.load_generation {
        tracing::debug!(
            generation,
            current = state.load_generation,
            "Ignoring superseded roster load"
        );
        return Task::none();
    }

    match result {
        Ok(roster) => state.apply_roster(roster),
        Err(err) => {
            tracing::error!(error = %err, "Roster load failed");
            state.load = LoadState::Failed(err);
        }
    }
    Task::none()
}

/// Restart the load after a failure. Ignored while a load is in flight.
pub fn retry_load(state: &mut AppState) -> Task<Message> {
    if state.load == LoadState::Loading {
        return Task::none();
    }
    start_load(state)
}
