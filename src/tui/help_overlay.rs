//! Help overlay listing every keyboard shortcut, grouped by context.
//!
//! Opened with '?', scrollable, closed with '?' or Esc.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use super::{Component, Theme};

/// Shortcut groups: (heading, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "PAGE",
        &[
            ("Tab / j", "Focus next section"),
            ("Shift+Tab / k", "Focus previous section"),
            ("Left / h", "Previous slide"),
            ("Right / l", "Next slide"),
            ("1-9", "Jump to slide N"),
            ("Enter / o", "Follow the slide's link"),
        ],
    ),
    (
        "HEADER",
        &[
            ("m", "Open / close the navigation menu"),
            ("c", "Get in touch (contact)"),
        ],
    ),
    (
        "MENU",
        &[
            ("Up / Down", "Select entry"),
            ("Enter", "Go to section, or open contact"),
            ("w e t c", "Work, Education, Cool Things, Contact"),
            ("Esc / m", "Close menu"),
        ],
    ),
    (
        "CONTACT",
        &[
            ("Up / Down", "Select action"),
            ("Enter", "Copy link to clipboard"),
            ("p / e", "Copy profile URL / email link"),
            ("Esc", "Close"),
        ],
    ),
    (
        "SYSTEM",
        &[
            ("?", "Toggle this help"),
            ("F12", "Toggle dark/light theme"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

/// Events emitted by the help overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpEvent {
    /// Overlay dismissed
    Closed,
}

/// Scroll state for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    total_lines: usize,
}

impl HelpOverlay {
    /// Creates a new help overlay scrolled to the top.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            total_lines: Self::content(&Theme::dark()).len(),
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    fn content(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (heading, entries) in SHORTCUTS {
            lines.push(Line::from(Span::styled(
                format!("═══ {heading} ═══"),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            for (keys, description) in *entries {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<16}"), Style::default().fg(theme.success)),
                    Span::styled(*description, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpOverlay {
    type Event = HelpEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(HelpEvent::Closed),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = super::centered_rect(60, 80, area);
        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content = Self::content(theme);
        let visible_height = chunks[0].height.saturating_sub(2) as usize; // Account for borders
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, chunks[0]);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);
        frame.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}
