//! Input handlers.
//!
//! Each handler translates key presses for one input context into page
//! actions and dispatches them through [`AppState::dispatch`](crate::tui::AppState::dispatch).

mod main;
mod overlays;

pub use main::handle_main_input;
pub use overlays::{handle_contact_input, handle_help_input, handle_menu_input};
