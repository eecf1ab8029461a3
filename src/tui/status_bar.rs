//! Status bar widget for status messages and contextual key hints

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Key hints for whatever currently receives input.
    #[must_use]
    pub fn hints(state: &AppState) -> &'static str {
        if state.help.is_some() {
            "↑↓: scroll | Esc/?: close help"
        } else if state.page.is_contact_open() {
            "↑↓: select | Enter: copy link | Esc: close"
        } else if state.page.is_menu_open() {
            "↑↓: select | Enter: go | Esc/m: close menu"
        } else {
            "Tab: section | ←→: slide | 1-9: jump | m: menu | c: contact | ?: help | q: quit"
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message = state.status_message.as_deref().unwrap_or("");
        let lines = vec![
            Line::from(Span::styled(message.to_string(), Style::default().fg(theme.success))),
            Line::from(Span::styled(
                Self::hints(state),
                Style::default().fg(theme.text_muted),
            )),
        ];
        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.surface))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(widget, area);
    }
}
