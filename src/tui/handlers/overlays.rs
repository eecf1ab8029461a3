//! Key handling for the menu, contact and help overlays.

use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::info;

use crate::page::PageAction;
use crate::tui::component::{Component, ContextualComponent};
use crate::tui::contact_modal::ContactEvent;
use crate::tui::help_overlay::HelpEvent;
use crate::tui::nav_menu::NavMenuEvent;
use crate::tui::AppState;

/// Handle input while the navigation menu is open.
pub fn handle_menu_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match state.menu.handle_input(key) {
        Some(NavMenuEvent::Activated(item)) => state.dispatch(item.action())?,
        Some(NavMenuEvent::Closed) => state.dispatch(PageAction::CloseMenu)?,
        None => {}
    }
    Ok(false)
}

/// Handle input while the contact modal is open.
pub fn handle_contact_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let event = state
        .contact
        .handle_input(key, &state.page.content().contact);
    match event {
        Some(ContactEvent::Open { url, .. }) => match state.clipboard.copy_text(&url) {
            Ok(()) => {
                info!(%url, "Copied contact link");
                state.set_status(format!("Copied to clipboard: {url}"));
            }
            Err(e) => state.set_error(format!("{e:#}\n\n{url}")),
        },
        Some(ContactEvent::Closed) => state.dispatch(PageAction::CloseContact)?,
        None => {}
    }
    Ok(false)
}

/// Handle input while the help overlay is open.
pub fn handle_help_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if let Some(help) = state.help.as_mut() {
        if help.handle_input(key) == Some(HelpEvent::Closed) {
            state.help = None;
        }
    }
    Ok(false)
}
