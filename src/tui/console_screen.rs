//! Console screen widget: the display region for items and prompts.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::{AppState, Theme};
use crate::controller::{Display, RenderedItem};

/// Console screen widget
pub struct ConsoleScreen;

impl ConsoleScreen {
    /// Render the current display content
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let controller = &state.controller;

        let border_style = if state.is_flashing() {
            Style::default()
                .fg(theme.flash)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.primary)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(border_style)
            .style(Style::default().bg(theme.screen_bg).fg(theme.screen_fg));

        let lines = match controller.display() {
            Display::Welcome(text) => vec![
                Line::raw(""),
                Line::styled(text.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            ],
            Display::Loading(text) => vec![
                Line::raw(""),
                Line::styled(
                    text.as_str(),
                    Style::default()
                        .fg(theme.text_muted)
                        .add_modifier(Modifier::DIM),
                ),
            ],
            Display::Item(item) => {
                Self::item_lines(item, controller.state().description_visible, theme)
            }
            Display::Failure(text) => vec![
                Line::raw(""),
                Line::styled(text.as_str(), Style::default().fg(theme.error)),
            ],
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, area);
    }

    /// Lines for an item; the description block only when expanded.
    pub fn item_lines<'a>(
        item: &'a RenderedItem,
        description_visible: bool,
        theme: &Theme,
    ) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::raw(""),
            Line::from(vec![
                Span::raw("🖼  "),
                Span::styled(item.image.as_str(), Style::default().add_modifier(Modifier::ITALIC)),
            ]),
            Line::raw(""),
            Line::styled(
                item.title.as_str(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("{}/{}", item.target.index + 1, item.total),
                Style::default().fg(theme.text_muted),
            ),
        ];

        if description_visible {
            lines.push(Line::raw(""));
            lines.push(Line::raw(item.description.as_str()));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", item.tools_label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(item.tools.join(", ")),
            ]));
        }

        lines
    }
}
