//! Row of category buttons.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::models::Category;

/// Category button bar
pub struct CategoryBar;

impl CategoryBar {
    /// Render one button per category, highlighting the selected one
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let labels = state.controller.text().buttons;
        let selected = state.controller.state().selected_category;

        let constraints = Category::ALL.map(|_| Constraint::Ratio(1, Category::ALL.len() as u32));
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (position, (category, cell)) in Category::ALL.iter().zip(cells.iter()).enumerate() {
            let is_selected = selected == Some(*category);
            let (border_style, text_style) = if is_selected {
                (
                    Style::default().fg(theme.accent),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default().fg(theme.text_muted),
                    Style::default().fg(theme.text),
                )
            };

            let label = format!("{} {}", position + 1, labels.label(*category));
            let button = Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(text_style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border_style),
                );
            f.render_widget(button, *cell);
        }
    }
}
