//! Regulation Planner - Desktop GUI Application
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::{Size, window};
use planner_gui::App;
use planner_gui::component::LUCIDE_FONT_BYTES;
use planner_gui::logging::{LogConfig, init_logging};

/// Application entry point.
pub fn main() -> iced::Result {
    init_logging(&LogConfig::from_env());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Regulation Planner");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1120.0, 600.0)),
            ..Default::default()
        })
        .run()
}
