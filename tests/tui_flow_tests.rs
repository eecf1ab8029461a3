//! Integration tests for keyboard-driven flows in the terminal UI.
//!
//! Key presses go through `handle_key_event` exactly as the event loop
//! delivers them; rendering uses ratatui's `TestBackend`.

mod fixtures;
use fixtures::*;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::models::SectionId;
use folio::tui::theme::ThemeVariant;
use folio::tui::{self, AppState};
use ratatui::{backend::TestBackend, Terminal};

fn press(state: &mut AppState, code: KeyCode) -> bool {
    tui::handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

fn screen(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
    terminal.draw(|f| tui::render(f, state)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

#[test]
fn test_arrows_cycle_focused_carousel() {
    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Right);
    assert_eq!(state.page.carousel(SectionId::Work).current(), 0);

    press(&mut state, KeyCode::Left);
    assert_eq!(state.page.carousel(SectionId::Work).current(), 2);
    assert!(screen(&state).contains("Gamma"));
}

#[test]
fn test_tab_moves_focus_between_sections() {
    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Tab);
    assert_eq!(state.page.focused(), SectionId::Education);
    press(&mut state, KeyCode::Right);
    assert_eq!(state.page.carousel(SectionId::Education).current(), 1);
    assert_eq!(state.page.carousel(SectionId::Work).current(), 0);

    press(&mut state, KeyCode::BackTab);
    press(&mut state, KeyCode::BackTab);
    assert_eq!(state.page.focused(), SectionId::CoolThings);
}

#[test]
fn test_digit_jumps_and_rejects_missing_slide() {
    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Char('3'));
    assert_eq!(state.page.carousel(SectionId::Work).current(), 2);

    press(&mut state, KeyCode::Char('9'));
    assert_eq!(state.page.carousel(SectionId::Work).current(), 2);
    assert!(state.error_message.is_none());
    assert!(state.status_message.as_deref().unwrap().contains("3 slides"));
}

#[test]
fn test_menu_contact_entry_closes_menu_and_opens_contact() {
    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Char('m'));
    assert!(state.page.is_menu_open());

    // Contact is the last entry
    press(&mut state, KeyCode::Up);
    press(&mut state, KeyCode::Enter);

    assert!(!state.page.is_menu_open());
    assert!(state.page.is_contact_open());
    let text = screen(&state);
    assert!(text.contains("Say hi"));
}

#[test]
fn test_menu_section_entry_navigates() {
    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Char('m'));
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Enter);

    assert!(!state.page.is_menu_open());
    assert_eq!(state.page.focused(), SectionId::CoolThings);
    assert_eq!(state.status_message.as_deref(), Some("#cool-things"));
}

#[test]
fn test_menu_reopens_on_first_entry() {
    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Char('m'));
    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Esc);
    assert!(!state.page.is_menu_open());

    press(&mut state, KeyCode::Char('m'));
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.page.focused(), SectionId::Work);
}

#[test]
fn test_contact_close_keeps_other_state() {
    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Char('c'));
    assert!(state.page.is_contact_open());

    // Carousel keys do not reach the page while the modal is open
    press(&mut state, KeyCode::Right);
    assert_eq!(state.page.carousel(SectionId::Work).current(), 1);

    press(&mut state, KeyCode::Esc);
    assert!(!state.page.is_contact_open());
    assert!(!state.page.is_menu_open());
    assert_eq!(state.page.carousel(SectionId::Work).current(), 1);
}

#[test]
fn test_section_anchor_link_navigates() {
    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Right); // "Beta" links to #education
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.page.focused(), SectionId::Education);
}

#[test]
fn test_non_section_anchor_is_reported() {
    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Char('o'));
    assert_eq!(state.page.focused(), SectionId::Work);
    assert_eq!(state.status_message.as_deref(), Some("Alpha link: #alpha"));
}

#[test]
fn test_help_overlay_blocks_page_input() {
    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Char('?'));
    assert!(state.help.is_some());
    press(&mut state, KeyCode::Char('m'));
    assert!(!state.page.is_menu_open());
    press(&mut state, KeyCode::Esc);
    assert!(state.help.is_none());
}

#[test]
fn test_quit_keys() {
    let mut state = test_app_state(test_page());
    assert!(press(&mut state, KeyCode::Char('q')));

    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Char('c'));
    let quit = tui::handle_key_event(
        &mut state,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    )
    .unwrap();
    assert!(quit);
}

#[test]
fn test_error_overlay_swallows_input_until_dismissed() {
    let mut state = test_app_state(test_page());
    state.set_error("boom");
    press(&mut state, KeyCode::Right);
    assert_eq!(state.page.carousel(SectionId::Work).current(), 0);
    press(&mut state, KeyCode::Enter);
    assert!(state.error_message.is_none());
}

#[test]
fn test_menu_highlights_selected_entry() {
    let mut state = test_app_state(test_page());
    press(&mut state, KeyCode::Char('m'));
    press(&mut state, KeyCode::Down);

    let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
    terminal.draw(|f| tui::render(f, &state)).unwrap();
    let highlighted: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .filter(|cell| cell.bg == state.theme.highlight_bg)
        .map(ratatui::buffer::Cell::symbol)
        .collect();
    assert!(highlighted.contains("Education"), "highlighted: {highlighted}");
    assert!(!highlighted.contains("Work"));
}

#[test]
fn test_f12_switches_theme_variant() {
    let mut state = test_app_state(test_page());
    let initial = state.theme.variant();
    press(&mut state, KeyCode::F(12));
    assert_ne!(state.theme.variant(), initial);
    press(&mut state, KeyCode::F(12));
    assert_eq!(state.theme.variant(), initial);
    assert!(matches!(initial, ThemeVariant::Dark | ThemeVariant::Light));
}
