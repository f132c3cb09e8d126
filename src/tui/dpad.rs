//! Directional pad widget with localized tooltips.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::controller::DpadControl;

/// Height of the pad itself (three rows of buttons).
const PAD_HEIGHT: u16 = 9;

/// Directional pad widget
pub struct DpadWidget;

impl DpadWidget {
    /// Render the pad and, when enabled, its tooltip legend
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(PAD_HEIGHT), Constraint::Min(0)])
            .split(inner);

        Self::render_pad(f, sections[0], state);

        if state.show_tooltips {
            Self::render_legend(f, sections[1], state);
        }
    }

    fn render_pad(f: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3); 3])
            .split(area);

        let columns = |row: Rect| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                    Constraint::Ratio(1, 3),
                ])
                .split(row)
        };

        let top = columns(rows[0]);
        let middle = columns(rows[1]);
        let bottom = columns(rows[2]);

        Self::render_button(f, top[1], DpadControl::ShowDescription, state);
        Self::render_button(f, middle[0], DpadControl::Previous, state);
        Self::render_button(f, middle[2], DpadControl::Next, state);
        Self::render_button(f, bottom[1], DpadControl::HideDescription, state);
    }

    fn render_button(f: &mut Frame, area: Rect, control: DpadControl, state: &AppState) {
        let theme = &state.theme;
        let style = if state.is_sparked(control) {
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text).bg(theme.surface)
        };

        let button = Paragraph::new(control.glyph())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.text_muted)),
            );
        f.render_widget(button, area);
    }

    fn render_legend(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let tooltips = state.controller.text().tooltips;

        let lines: Vec<Line> = DpadControl::ALL
            .iter()
            .map(|control| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", control.glyph()),
                        Style::default().fg(theme.accent),
                    ),
                    Span::styled(tooltips.hint(*control), Style::default().fg(theme.text)),
                ])
            })
            .collect();

        f.render_widget(Paragraph::new(lines), area);
    }
}
