//! Main application module.
//!
//! Iced 0.14.0 builder pattern, Elm architecture: State → Message → Update → View.
//! All state changes happen in `update()`; views are pure functions of
//! [`AppState`].

mod keyboard;

use chrono::Local;
use iced::{Element, Subscription, Task, Theme};

use crate::handler::{MessageHandler, PlanningHandler, RecapHandler, roster};
use crate::message::Message;
use crate::state::{AppState, Settings};

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application and start loading the roster.
    ///
    /// Called once at startup by the Iced runtime.
    pub fn new() -> (Self, Task<Message>) {
        let settings_path = Settings::config_path();
        let (settings, settings_error) = match Settings::try_load_from(&settings_path) {
            Ok(settings) => (settings, None),
            Err(err) => {
                tracing::warn!(error = %err, "Using default settings");
                (Settings::default(), Some(err))
            }
        };
        tracing::info!(path = %settings_path.display(), "Settings loaded");

        let mut state = AppState::new(settings, Some(settings_path), Local::now().date_naive());
        state.error = settings_error;
        Self::boot(state)
    }

    /// Start the application from a prepared state.
    pub fn boot(state: AppState) -> (Self, Task<Message>) {
        let mut app = Self { state };
        let load = roster::start_load(&mut app.state);
        (app, load)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => {
                self.state.editor.dismiss();
                self.state.page = page;
                Task::none()
            }

            Message::Planning(msg) => PlanningHandler.handle(&mut self.state, msg),
            Message::Recap(msg) => RecapHandler.handle(&mut self.state, msg),

            Message::RosterLoaded { generation, result } => {
                roster::finish_load(&mut self.state, generation, result)
            }
            Message::RetryLoad => roster::retry_load(&mut self.state),

            Message::ToggleTheme => {
                self.toggle_theme();
                Task::none()
            }
            Message::DismissError => {
                self.state.error = None;
                Task::none()
            }
            Message::KeyPressed(key, modifiers) => self.handle_key_press(&key, modifiers),
            Message::Noop => Task::none(),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        crate::view::view_app(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        match self.state.page {
            crate::state::Page::Planning => {
                format!("Regulation Planner - {}", self.state.navigator.month().label())
            }
            crate::state::Page::Recap => format!(
                "Regulation Planner - {}",
                planner_model::recap_header(self.state.recap_month)
            ),
        }
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.state.settings.display.theme_mode.theme()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        iced::keyboard::listen().map(|event| match event {
            iced::keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        })
    }

    fn toggle_theme(&mut self) {
        let display_settings = &mut self.state.settings.display;
        display_settings.theme_mode = display_settings.theme_mode.toggled();
        tracing::info!(mode = display_settings.theme_mode.label(), "Theme changed");

        if let Some(path) = &self.state.settings_path
            && let Err(err) = self.state.settings.save_to(path)
        {
            tracing::error!(error = %err, "Could not save settings");
            self.state.error = Some(err);
        }
    }
}
