//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, and the widgets that
//! make up the console: header, category buttons, screen, directional pad,
//! and status bar.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod category_bar;
pub mod component;
pub mod console_screen;
pub mod dpad;
pub mod handlers;
pub mod language_selector;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::ThemeMode;
use crate::controller::{Controller, DpadControl, PreferenceStore};
use crate::shortcuts::ShortcutRegistry;

pub use category_bar::CategoryBar;
pub use component::Component;
pub use console_screen::ConsoleScreen;
pub use dpad::DpadWidget;
pub use language_selector::{LanguageSelector, LanguageSelectorEvent};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// How long the screen border flashes after a language change.
pub const FLASH_DURATION: Duration = Duration::from_millis(400);

/// How long a pressed directional control stays highlighted.
pub const SPARK_DURATION: Duration = Duration::from_millis(600);

/// Event poll timeout; short enough that delayed renders land on time.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Width of the directional pad column.
const DPAD_WIDTH: u16 = 30;

/// Controller type driven by the TUI.
pub type AppController = Controller<Box<dyn PreferenceStore>>;

/// Application state for the TUI.
pub struct AppState {
    /// Presentation controller
    pub controller: AppController,
    /// Active color theme
    pub theme: Theme,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Open language selector, if any
    pub language_selector: Option<LanguageSelector>,
    /// Whether the pad shows its tooltip legend
    pub show_tooltips: bool,
    /// Error shown in the status bar
    pub error_message: Option<String>,
    /// End of the current screen flash
    pub flash_until: Option<Instant>,
    /// Most recently pressed control and when its highlight ends
    pub spark: Option<(DpadControl, Instant)>,
    /// Set to leave the event loop
    pub should_quit: bool,
}

impl AppState {
    /// Creates the TUI state around a controller.
    #[must_use]
    pub fn new(controller: AppController, theme_mode: ThemeMode) -> Self {
        Self {
            controller,
            theme: Theme::from_mode(theme_mode),
            shortcuts: ShortcutRegistry::new(),
            language_selector: None,
            show_tooltips: true,
            error_message: None,
            flash_until: None,
            spark: None,
            should_quit: false,
        }
    }

    /// Clear the status bar error.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Start the screen flash that marks a language change.
    pub fn start_flash(&mut self, now: Instant) {
        self.flash_until = Some(now + FLASH_DURATION);
    }

    /// Highlight a pressed directional control.
    pub fn start_spark(&mut self, control: DpadControl, now: Instant) {
        self.spark = Some((control, now + SPARK_DURATION));
    }

    /// Whether the screen flash is active.
    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.flash_until.is_some()
    }

    /// Whether `control` is highlighted.
    #[must_use]
    pub fn is_sparked(&self, control: DpadControl) -> bool {
        matches!(self.spark, Some((sparked, _)) if sparked == control)
    }

    /// Advance timers: apply due renders and expire highlights.
    ///
    /// Returns `true` if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.controller.tick(now);

        if self.flash_until.is_some_and(|until| until <= now) {
            self.flash_until = None;
            changed = true;
        }
        if self.spark.is_some_and(|(_, until)| until <= now) {
            self.spark = None;
            changed = true;
        }
        if let Some(err) = self.controller.take_persist_error() {
            self.error_message = Some(format!("Could not save language: {err}"));
            changed = true;
        }

        changed
    }
}

/// Setup terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    loop {
        state.tick(Instant::now());

        terminal.draw(|f| render(f, state))?;

        let timeout = state
            .controller
            .next_render_due()
            .map_or(POLL_INTERVAL, |due| {
                due.saturating_duration_since(Instant::now()).min(POLL_INTERVAL)
            });

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handlers::handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                // Terminal resized or other event, will re-render on next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Draw the whole console.
pub fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Category buttons
            Constraint::Min(10),   // Screen + pad
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], state);
    CategoryBar::render(f, chunks[1], state);
    render_main_content(f, chunks[2], state);
    StatusBar::render(f, chunks[3], state, &state.theme);

    if let Some(selector) = &state.language_selector {
        let area = centered_rect(40, 30, f.area());
        selector.render(f, area, &state.theme);
    }
}

fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let text = state.controller.text();

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            text.header_name,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(text.subtitle, Style::default().fg(theme.text))),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.text_muted)),
    );

    f.render_widget(header, area);
}

fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(DPAD_WIDTH)])
        .split(area);

    ConsoleScreen::render(f, columns[0], state);
    DpadWidget::render(f, columns[1], state);
}

/// Helper to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{MemoryStore, RENDER_DELAY};
    use crate::i18n::Language;
    use crate::models::{Catalog, Category};
    use ratatui::backend::TestBackend;

    fn app_state() -> AppState {
        let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::default());
        let controller = Controller::new(Catalog::builtin().unwrap(), store);
        AppState::new(controller, ThemeMode::Dark)
    }

    fn screen_text(state: &AppState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_welcome_and_tooltips() {
        let state = app_state();
        let screen = screen_text(&state);
        assert!(screen.contains("Melany Chuquimbalqui"));
        assert!(screen.contains("Select a category to start"));
        assert!(screen.contains("Previous"));
        assert!(screen.contains("Hide description"));
    }

    #[test]
    fn test_render_item_after_delay() {
        let mut state = app_state();
        state.controller.select_category(Category::Mobile);
        state.tick(Instant::now() + RENDER_DELAY);

        let screen = screen_text(&state);
        assert!(screen.contains("Paws-App"));
        assert!(!screen.contains("Swift"), "description starts collapsed");

        state.controller.show_description();
        assert!(screen_text(&state).contains("Swift, XCode"));
    }

    #[test]
    fn test_render_in_spanish() {
        let mut state = app_state();
        state.controller.set_language(Language::Es);
        let screen = screen_text(&state);
        assert!(screen.contains("Anterior"));
        assert!(screen.contains("Contacto"));
    }

    #[test]
    fn test_status_bar_error_replaces_hints_until_cleared() {
        let mut state = app_state();
        assert!(screen_text(&state).contains("q quit"));

        state.error_message = Some("Could not save language: disk full".to_string());
        let screen = screen_text(&state);
        assert!(screen.contains("ERROR: Could not save language: disk full"));
        assert!(!screen.contains("q quit"));

        state.clear_error();
        assert!(screen_text(&state).contains("q quit"));
    }

    #[test]
    fn test_highlights_expire() {
        let mut state = app_state();
        let now = Instant::now();
        state.start_flash(now);
        state.start_spark(DpadControl::Next, now);
        assert!(state.is_flashing());
        assert!(state.is_sparked(DpadControl::Next));
        assert!(!state.is_sparked(DpadControl::Previous));

        assert!(state.tick(now + SPARK_DURATION));
        assert!(!state.is_flashing());
        assert!(state.spark.is_none());
    }
}
