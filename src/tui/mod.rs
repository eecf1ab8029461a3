//! Terminal user interface: the page as a ratatui application.
//!
//! This module contains the main TUI loop, `AppState`, input routing and the
//! widgets that draw the page and its overlays.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod clipboard;
pub mod component;
pub mod contact_modal;
pub mod handlers;
pub mod help_overlay;
pub mod nav_menu;
pub mod page_view;
pub mod slide_section;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::SectionId;
use crate::page::{PageAction, PageEvent, PortfolioPage};

// Re-export TUI components
pub use clipboard::SessionClipboard;
pub use component::{Component, ContextualComponent};
pub use contact_modal::{ContactAction, ContactEvent, ContactModal};
pub use help_overlay::HelpOverlay;
pub use nav_menu::{NavMenuEvent, NavigationMenu};
pub use page_view::PageView;
pub use slide_section::SlideSection;
pub use status_bar::StatusBar;
pub use theme::{Theme, ThemeVariant};

/// Application state for the terminal session.
#[derive(Debug)]
pub struct AppState {
    /// Page state machine
    pub page: PortfolioPage,
    /// Active color theme
    pub theme: Theme,
    /// Loaded configuration
    pub config: Config,
    /// Cursor of the navigation overlay
    pub menu: NavigationMenu,
    /// Cursor of the contact modal
    pub contact: ContactModal,
    /// Clipboard held for the whole session
    pub clipboard: SessionClipboard,
    /// Help overlay, when shown
    pub help: Option<HelpOverlay>,
    /// Last status message
    pub status_message: Option<String>,
    /// Error shown in a dismissable overlay
    pub error_message: Option<String>,
    /// Set to leave the event loop
    pub should_quit: bool,
}

impl AppState {
    /// Creates the session state for a page.
    #[must_use]
    pub fn new(page: PortfolioPage, config: Config) -> Self {
        let help = config.ui.show_help_on_startup.then(HelpOverlay::new);
        Self {
            page,
            theme: Theme::from_mode(config.ui.theme_mode),
            config,
            menu: NavigationMenu::new(),
            contact: ContactModal::new(),
            clipboard: SessionClipboard::new(),
            help,
            status_message: None,
            error_message: None,
            should_quit: false,
        }
    }

    /// Applies a page action and reacts to the resulting event.
    pub fn dispatch(&mut self, action: PageAction) -> Result<()> {
        let menu_was_open = self.page.is_menu_open();
        let contact_was_open = self.page.is_contact_open();

        let event = self.page.apply(action)?;

        // Overlays start with their first entry selected each time they open
        if self.page.is_menu_open() && !menu_was_open {
            self.menu.reset();
        }
        if self.page.is_contact_open() && !contact_was_open {
            self.contact.reset();
        }

        match event {
            PageEvent::ScrollTo(anchor) => {
                info!(anchor, "Navigated to section");
                self.set_status(format!("#{anchor}"));
            }
            PageEvent::None => {}
        }
        Ok(())
    }

    /// Activates the link of the focused section's current slide.
    ///
    /// Section anchors navigate, other anchors are reported, external URLs
    /// are copied to the clipboard.
    pub fn follow_slide_link(&mut self) -> Result<()> {
        let focused = self.page.focused();
        let Some(link) = self.page.current_slide(focused).link.clone() else {
            self.set_status("This slide has no link");
            return Ok(());
        };

        match link.anchor() {
            Some(anchor) => match SectionId::from_anchor(anchor) {
                Some(id) => self.dispatch(PageAction::Navigate(id))?,
                None => self.set_status(format!("{}: #{anchor}", link.text)),
            },
            None => match self.clipboard.copy_text(&link.url) {
                Ok(()) => self.set_status(format!("Copied to clipboard: {}", link.url)),
                Err(e) => {
                    warn!(error = %e, "Clipboard copy failed");
                    self.set_error(format!("{e:#}\n\n{}", link.url));
                }
            },
        }
        Ok(())
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    info!("Starting terminal session");
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 250ms timeout; resize just re-renders
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }
    info!("Terminal session ended");
    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(f.area());

    PageView::render(f, chunks[0], &state.page, &state.theme);
    StatusBar::render(f, chunks[1], state, &state.theme);

    if state.page.is_menu_open() {
        state.menu.render(f, chunks[0], &state.theme);
    }
    // Mounted once at the root, above the menu
    if state.page.is_contact_open() {
        state
            .contact
            .render(f, f.area(), &state.theme, &state.page.content().contact);
    }
    if let Some(help) = &state.help {
        help.render(f, f.area(), &state.theme);
    }
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render error overlay
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Error",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(error.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to dismiss",
            Style::default().fg(theme.text_muted),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(widget, area);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Centered rectangle of a fixed size, clamped to `r`.
pub(crate) fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Handle keyboard input events. Returns `Ok(true)` when the user quits.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return Ok(false);
    }

    debug!(?key.code, "Key pressed");

    if state.help.is_some() {
        return handlers::handle_help_input(state, key);
    }
    if state.page.is_contact_open() {
        return handlers::handle_contact_input(state, key);
    }
    if state.page.is_menu_open() {
        return handlers::handle_menu_input(state, key);
    }
    handlers::handle_main_input(state, key)
}
