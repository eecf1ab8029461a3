//! Key handling for the page itself (no overlay open).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::page::PageAction;
use crate::tui::{AppState, HelpOverlay, Theme, ThemeVariant};

/// Handle input when no overlay is open. Returns `Ok(true)` to quit.
pub fn handle_main_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let focused = state.page.focused();
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
            state.dispatch(PageAction::Focus(focused.next()))?;
            state.set_status(format!("#{}", focused.next().anchor()));
        }
        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
            state.dispatch(PageAction::Focus(focused.previous()))?;
            state.set_status(format!("#{}", focused.previous().anchor()));
        }
        KeyCode::Right | KeyCode::Char('l') => state.dispatch(PageAction::NextSlide(focused))?,
        KeyCode::Left | KeyCode::Char('h') => {
            state.dispatch(PageAction::PreviousSlide(focused))?;
        }
        KeyCode::Char(digit @ '1'..='9') => {
            // Indicators only exist for real slides, so range is checked here
            let index = digit as usize - '1' as usize;
            if index < state.page.carousel(focused).len() {
                state.dispatch(PageAction::GoToSlide(focused, index))?;
            } else {
                state.set_status(format!(
                    "{} has {} slides",
                    state.page.section(focused).title,
                    state.page.carousel(focused).len()
                ));
            }
        }
        KeyCode::Enter | KeyCode::Char('o') => state.follow_slide_link()?,
        KeyCode::Char('m') => state.dispatch(PageAction::ToggleMenu)?,
        KeyCode::Char('c') => state.dispatch(PageAction::OpenContact)?,
        KeyCode::Char('?') => state.help = Some(HelpOverlay::new()),
        KeyCode::F(12) => {
            state.theme = Theme::from_variant(match state.theme.variant() {
                ThemeVariant::Dark => ThemeVariant::Light,
                ThemeVariant::Light => ThemeVariant::Dark,
            });
        }
        _ => {}
    }
    Ok(false)
}
