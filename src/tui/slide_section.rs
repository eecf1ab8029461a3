//! Carousel section widget.
//!
//! Layout mirrors the page: a placeholder panel on the left, the current
//! slide on the right, previous/next arrows on the edges and one dot per
//! slide underneath.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::models::SectionId;
use crate::page::PortfolioPage;

/// Renders one carousel section.
pub struct SlideSection;

impl SlideSection {
    /// Renders section `id`, highlighted when it has focus.
    pub fn render(f: &mut Frame, area: Rect, page: &PortfolioPage, id: SectionId, theme: &Theme) {
        let section = page.section(id);
        let carousel = page.carousel(id);
        let slide = page.current_slide(id);
        let focused = page.focused() == id;

        let border_style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.primary)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if focused {
                BorderType::Thick
            } else {
                BorderType::Plain
            })
            .border_style(border_style)
            .title(Line::from(vec![
                Span::styled(
                    format!(" {}", section.title),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(". ", Style::default().fg(theme.accent)),
            ]))
            .title(
                Line::from(Span::styled(
                    format!(" #{} ", id.anchor()),
                    Style::default().fg(theme.text_muted),
                ))
                .right_aligned(),
            )
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(2),
                Constraint::Percentage(30),
                Constraint::Length(2),
                Constraint::Min(10),
                Constraint::Length(2),
            ])
            .split(rows[0]);

        let arrow_style = Style::default().fg(if focused {
            theme.accent
        } else {
            theme.text_muted
        });
        f.render_widget(Paragraph::new("‹").style(arrow_style), columns[0]);
        f.render_widget(Paragraph::new("›").style(arrow_style), columns[4]);

        f.render_widget(
            Block::default().style(Style::default().bg(theme.surface)),
            columns[1],
        );

        let mut lines = vec![
            Line::from(Span::styled(
                slide.title.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                slide.description.clone(),
                Style::default().fg(theme.text),
            )),
        ];
        if let Some(link) = &slide.link {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[ {} ]", link.text),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(format!(" {}", link.url), Style::default().fg(theme.text_muted)),
            ]));
        }
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            columns[3],
        );

        let dots: Vec<Span> = (0..carousel.len())
            .map(|index| {
                let color = if carousel.is_current(index) {
                    theme.accent
                } else {
                    theme.text_muted
                };
                Span::styled(
                    if carousel.is_current(index) { "● " } else { "○ " },
                    Style::default().fg(color),
                )
            })
            .collect();
        f.render_widget(Paragraph::new(Line::from(dots)).centered(), rows[1]);
    }
}
