//! Language selector popup.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use super::component::Component;
use super::Theme;
use crate::i18n::{self, Language};

/// Events emitted by the language selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSelectorEvent {
    /// A language was chosen
    Selected(Language),
    /// Closed without choosing
    Cancelled,
}

/// List of the supported languages, starting on the active one.
#[derive(Debug, Clone)]
pub struct LanguageSelector {
    /// Language whose strings label the popup
    current: Language,
    /// Highlighted row
    selected: usize,
}

impl LanguageSelector {
    /// Opens the selector with `current` highlighted.
    #[must_use]
    pub fn new(current: Language) -> Self {
        let selected = Language::ALL
            .iter()
            .position(|lang| *lang == current)
            .unwrap_or(0);
        Self { current, selected }
    }

    /// Highlighted language.
    #[must_use]
    pub fn highlighted(&self) -> Language {
        Language::ALL[self.selected]
    }

    fn previous(&mut self) {
        let len = Language::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    fn next(&mut self) {
        self.selected = (self.selected + 1) % Language::ALL.len();
    }
}

impl Component for LanguageSelector {
    type Event = LanguageSelectorEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                None
            }
            KeyCode::Enter => Some(LanguageSelectorEvent::Selected(self.highlighted())),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('g') => {
                Some(LanguageSelectorEvent::Cancelled)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);

        let items: Vec<ListItem> = Language::ALL
            .iter()
            .map(|lang| {
                let marker = if *lang == self.current { "● " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent)),
                    Span::styled(lang.code(), Style::default().fg(theme.text_muted)),
                    Span::raw("  "),
                    Span::styled(lang.native_name(), Style::default().fg(theme.text)),
                ]))
            })
            .collect();

        let title = format!(" {} ", i18n::bundle(self.current).language_title);
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.surface)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        f.render_stateful_widget(list, area, &mut list_state);
    }
}
