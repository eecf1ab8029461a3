//! The scrolling body of the page: header, hero, carousels, call to action, footer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{SlideSection, Theme};
use crate::models::SectionId;
use crate::page::PortfolioPage;

/// Renders the page underneath any overlay.
pub struct PageView;

impl PageView {
    /// Renders every static part of the page and the three carousels.
    pub fn render(f: &mut Frame, area: Rect, page: &PortfolioPage, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Hero
                Constraint::Min(6),    // Work
                Constraint::Min(6),    // Education
                Constraint::Min(6),    // Cool things
                Constraint::Length(4), // Call to action
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self::render_header(f, chunks[0], page, theme);
        Self::render_hero(f, chunks[1], page, theme);
        for (id, chunk) in SectionId::ALL.into_iter().zip(&chunks[2..5]) {
            SlideSection::render(f, *chunk, page, id, theme);
        }
        Self::render_call_to_action(f, chunks[5], page, theme);
        Self::render_footer(f, chunks[6], page, theme);
    }

    fn render_header(f: &mut Frame, area: Rect, page: &PortfolioPage, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.surface))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(20)])
            .split(inner);

        let menu_label = if page.is_menu_open() { "✕ MENU" } else { "MENU" };
        let left = Line::from(vec![
            Span::styled("▲ ", Style::default().fg(theme.accent)),
            Span::styled(
                page.content().brand.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(format!("{menu_label} (m)"), Style::default().fg(theme.text)),
        ]);
        f.render_widget(Paragraph::new(left), columns[0]);

        let right = Paragraph::new(Span::styled(
            "[ GET IN TOUCH (c) ]",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .right_aligned();
        f.render_widget(right, columns[1]);
    }

    fn render_hero(f: &mut Frame, area: Rect, page: &PortfolioPage, theme: &Theme) {
        let hero = &page.content().hero;
        let heading = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled(hero.greeting.clone(), heading)),
            Line::from(vec![
                Span::styled(hero.name.clone(), heading),
                Span::styled(".", Style::default().fg(theme.accent)),
            ]),
            Line::from(Span::styled(
                hero.tagline.clone(),
                Style::default().fg(theme.text),
            )),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(theme.background)),
            area,
        );
    }

    fn render_call_to_action(f: &mut Frame, area: Rect, page: &PortfolioPage, theme: &Theme) {
        let cta = &page.content().call_to_action;
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    cta.heading.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(".", Style::default().fg(theme.accent)),
            ]),
            Line::from(Span::styled(cta.body.clone(), Style::default().fg(theme.text))),
            Line::from(Span::styled(
                format!("[ {} (c) ]", cta.button_label),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .style(Style::default().bg(theme.background)),
            area,
        );
    }

    fn render_footer(f: &mut Frame, area: Rect, page: &PortfolioPage, theme: &Theme) {
        f.render_widget(
            Paragraph::new(page.content().footer.clone())
                .style(Style::default().fg(theme.text_muted).bg(theme.background)),
            area,
        );
    }
}
