//! Reusable view components.

mod nav_button;
mod status_badge;
mod status_picker;

pub use iced_fonts::LUCIDE_FONT_BYTES;
pub use nav_button::nav_button;
pub use status_badge::status_badge;
pub use status_picker::status_picker;
