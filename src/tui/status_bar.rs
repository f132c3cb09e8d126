//! Status bar widget for errors, key hints, and the footer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Key hints shown when there is no error.
const HINTS: &[(&str, &str)] = &[
    ("1-3", "category"),
    ("←→", "browse"),
    ("↑↓", "description"),
    ("g", "language"),
    ("?", "tooltips"),
    ("q", "quit"),
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ])
        } else {
            Self::get_hints_line(theme)
        };

        let text = state.controller.text();
        let footer = Line::from(vec![
            Span::styled(
                text.contact_title,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", Style::default().fg(theme.text_muted)),
            Span::styled(
                format!("{}: ", text.language_title),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(
                state.controller.state().language.native_name(),
                Style::default().fg(theme.accent),
            ),
        ]);

        let status = Paragraph::new(vec![first_line, footer]).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted))
                .style(Style::default().bg(theme.background)),
        );

        f.render_widget(status, area);
    }

    /// Key hints line
    fn get_hints_line(theme: &Theme) -> Line<'static> {
        let mut spans = Vec::with_capacity(HINTS.len() * 3);
        for (index, (key, action)) in HINTS.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.accent)));
            spans.push(Span::styled(
                format!(" {action}"),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
