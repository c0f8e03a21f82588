//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and system events flow through these message types.

pub mod planning;
pub mod recap;

use iced::keyboard;
use planner_model::Roster;

use crate::error::GuiError;
use crate::state::Page;

pub use planning::PlanningMessage;
pub use recap::RecapMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Switch between the planning grid and the monthly recap.
    Navigate(Page),

    // =========================================================================
    // Page messages
    // =========================================================================
    /// Planning grid messages.
    Planning(PlanningMessage),

    /// Monthly recap messages.
    Recap(RecapMessage),

    // =========================================================================
    // Roster loading
    // =========================================================================
    /// The background roster load finished.
    ///
    /// `generation` identifies the load; results from superseded loads are
    /// dropped.
    RosterLoaded {
        generation: u64,
        result: Result<Roster, GuiError>,
    },

    /// Start the roster load again after a failure.
    RetryLoad,

    // =========================================================================
    // Application chrome
    // =========================================================================
    /// Switch between light and dark theme and persist the choice.
    ToggleTheme,

    /// Hide the error banner.
    DismissError,

    /// Global key press.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation.
    Noop,
}
