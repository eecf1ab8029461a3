//! Contact modal with the profile link and the email action.
//!
//! A terminal cannot open a new browsing context, so activating an action
//! hands its URL to the parent, which copies it to the clipboard.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::{ContextualComponent, Theme};
use crate::models::ContactLinks;

/// The two outbound actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    /// Social profile link
    Profile,
    /// `mailto:` link
    Email,
}

impl ContactAction {
    /// Both actions in display order.
    pub const ALL: [Self; 2] = [Self::Profile, Self::Email];

    /// Button label for the action.
    #[must_use]
    pub fn label(self, links: &ContactLinks) -> &str {
        match self {
            Self::Profile => &links.profile_label,
            Self::Email => &links.email_label,
        }
    }

    /// Target URL of the action.
    #[must_use]
    pub fn url(self, links: &ContactLinks) -> String {
        match self {
            Self::Profile => links.profile_url.clone(),
            Self::Email => links.mailto(),
        }
    }
}

/// Events emitted by the contact modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    /// An action was activated; carries its URL
    Open {
        /// Which action
        action: ContactAction,
        /// Resolved URL
        url: String,
    },
    /// Close control
    Closed,
}

/// Cursor over the modal's actions. Visibility lives in the page state.
#[derive(Debug, Clone, Default)]
pub struct ContactModal {
    selected: usize,
}

impl ContactModal {
    /// Creates a modal with the profile action selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Puts the cursor back on the first action.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    /// Currently highlighted action.
    #[must_use]
    pub const fn selected(&self) -> ContactAction {
        ContactAction::ALL[self.selected]
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ContactAction::ALL.len();
    }

    fn select_previous(&mut self) {
        self.selected = (self.selected + ContactAction::ALL.len() - 1) % ContactAction::ALL.len();
    }
}

impl ContextualComponent for ContactModal {
    type Context = ContactLinks;
    type Event = ContactEvent;

    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event> {
        let open = |action: ContactAction| ContactEvent::Open {
            action,
            url: action.url(context),
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.select_next();
                None
            }
            KeyCode::Enter => Some(open(self.selected())),
            KeyCode::Char('p') => Some(open(ContactAction::Profile)),
            KeyCode::Char('e') => Some(open(ContactAction::Email)),
            KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') => Some(ContactEvent::Closed),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context) {
        let popup = super::centered_fixed(44, 11, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.primary))
            .title(Line::from(Span::styled(
                format!(" {} ", context.heading),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )))
            .title(
                Line::from(Span::styled(" ✕ Esc ", Style::default().fg(theme.accent)))
                    .alignment(Alignment::Right),
            )
            .style(Style::default().bg(theme.background));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1), // profile
                Constraint::Length(1),
                Constraint::Length(1), // email
                Constraint::Length(1),
                Constraint::Min(1), // hint
            ])
            .split(inner);

        for (action, row) in ContactAction::ALL.into_iter().zip([rows[1], rows[3]]) {
            let bg = match action {
                ContactAction::Profile => theme.profile,
                ContactAction::Email => theme.accent,
            };
            let mut style = Style::default().fg(theme.text).bg(bg);
            let marker = if self.selected() == action {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                "▶ "
            } else {
                "  "
            };
            f.render_widget(
                Paragraph::new(format!("{marker}{}", action.label(context)))
                    .style(style)
                    .alignment(Alignment::Center),
                row,
            );
        }

        let hint = Paragraph::new(Line::from(Span::styled(
            self.selected().url(context),
            Style::default().fg(theme.text_muted),
        )))
        .alignment(Alignment::Center);
        f.render_widget(hint, rows[5]);
    }
}
