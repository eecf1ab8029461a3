//! Full-screen navigation overlay.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::{Component, Theme};
use crate::page::MenuItem;

/// Events emitted by the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMenuEvent {
    /// An entry was activated
    Activated(MenuItem),
    /// Close control (Esc / m)
    Closed,
}

/// Cursor over the menu entries. Visibility lives in the page state.
#[derive(Debug, Clone, Default)]
pub struct NavigationMenu {
    selected: usize,
}

impl NavigationMenu {
    /// Creates a menu with the first entry selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Puts the cursor back on the first entry.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Currently highlighted entry.
    #[must_use]
    pub const fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MenuItem::ALL.len();
    }

    fn select_previous(&mut self) {
        self.selected = (self.selected + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }
}

impl Component for NavigationMenu {
    type Event = NavMenuEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.select_next();
                None
            }
            KeyCode::Enter => Some(NavMenuEvent::Activated(self.selected())),
            KeyCode::Char('w') => Some(NavMenuEvent::Activated(MenuItem::ALL[0])),
            KeyCode::Char('e') => Some(NavMenuEvent::Activated(MenuItem::ALL[1])),
            KeyCode::Char('t') => Some(NavMenuEvent::Activated(MenuItem::ALL[2])),
            KeyCode::Char('c') => Some(NavMenuEvent::Activated(MenuItem::Contact)),
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('x') => Some(NavMenuEvent::Closed),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        // Entries are spaced one blank line apart and centered vertically
        let entries = MenuItem::ALL.len() as u16;
        let height = entries * 2 - 1;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(height),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        let mut lines = Vec::new();
        for (idx, item) in MenuItem::ALL.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::from(""));
            }
            let style = if idx == self.selected {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::from(Span::styled(item.label(), style)));
        }
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[1],
        );

        let close = Paragraph::new(Line::from(vec![
            Span::styled("✕ ", Style::default().fg(theme.accent)),
            Span::styled(
                "Esc: close  ↑↓: select  Enter: go",
                Style::default().fg(theme.text_muted),
            ),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(close, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionId;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_wraps() {
        let mut menu = NavigationMenu::new();
        assert_eq!(menu.handle_input(key(KeyCode::Up)), None);
        assert_eq!(menu.selected(), MenuItem::Contact);
        menu.handle_input(key(KeyCode::Down));
        assert_eq!(menu.selected(), MenuItem::Section(SectionId::Work));
    }

    #[test]
    fn test_enter_activates_selection() {
        let mut menu = NavigationMenu::new();
        menu.handle_input(key(KeyCode::Down));
        assert_eq!(
            menu.handle_input(key(KeyCode::Enter)),
            Some(NavMenuEvent::Activated(MenuItem::Section(SectionId::Education)))
        );
    }

    #[test]
    fn test_shortcuts_and_close() {
        let mut menu = NavigationMenu::new();
        assert_eq!(
            menu.handle_input(key(KeyCode::Char('c'))),
            Some(NavMenuEvent::Activated(MenuItem::Contact))
        );
        assert_eq!(menu.handle_input(key(KeyCode::Esc)), Some(NavMenuEvent::Closed));
    }
}
