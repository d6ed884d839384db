//! Event polling and key dispatch for the TUI.

use super::app::App;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal tick
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler polling every `tick_rate` milliseconds
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TICK_RATE_MS)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Release/repeat events are reported on some platforms.
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) => app.toggle_help(),
            KeyCode::Char('c') if ctrl => app.quit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char('n') if ctrl => app.next_step(),
        KeyCode::Char('p') if ctrl => app.previous_step(),
        KeyCode::Char('t') if ctrl => app.cycle_theme(),
        KeyCode::Esc => app.quit(),
        KeyCode::F(1) => app.toggle_help(),
        KeyCode::PageDown => app.next_step(),
        KeyCode::PageUp => app.previous_step(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Left => {
            app.cycle_select(-1);
        }
        KeyCode::Right => {
            app.cycle_select(1);
        }
        // Up/Down change a focused select, otherwise they move focus
        KeyCode::Up => {
            if !app.cycle_select(-1) {
                app.focus_prev();
            }
        }
        KeyCode::Down => {
            if !app.cycle_select(1) {
                app.focus_next();
            }
        }
        KeyCode::Enter => app.activate(),
        KeyCode::Backspace => {
            app.backspace();
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.type_char(c);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::QuestionnaireController;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        let mut app = App::new(QuestionnaireController::default());
        app.persist_preferences = false;
        app
    }

    #[test]
    fn test_page_keys_navigate() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::PageDown));
        handle_key_event(&mut app, ctrl('n'));
        assert_eq!(app.controller().cursor(), 2);
        handle_key_event(&mut app, key(KeyCode::PageUp));
        handle_key_event(&mut app, ctrl('p'));
        handle_key_event(&mut app, ctrl('p'));
        assert_eq!(app.controller().cursor(), 0);
    }

    #[test]
    fn test_right_arrow_selects_first_option() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Right));
        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.controller().answer("period"), "中学生");
    }

    #[test]
    fn test_up_down_cycle_focused_select() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.controller().answer("period"), "中学生");
        handle_key_event(&mut app, key(KeyCode::Up));
        assert_eq!(app.controller().answer("period"), "小学生");
        assert_eq!(app.focused(), Some(crate::tui::FocusTarget::Input(0)));
    }

    #[test]
    fn test_up_down_move_focus_on_text_inputs() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::PageDown));
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.focused(), Some(crate::tui::FocusTarget::Input(1)));
        handle_key_event(&mut app, key(KeyCode::Up));
        assert_eq!(app.focused(), Some(crate::tui::FocusTarget::Input(0)));
    }

    #[test]
    fn test_typing_into_text_step() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::PageDown));
        for c in "友達".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.controller().answer("relationships"), "友達");
    }

    #[test]
    fn test_ctrl_chars_are_not_typed() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::PageDown));
        handle_key_event(&mut app, ctrl('x'));
        assert_eq!(app.controller().answer("relationships"), "");
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::PageDown,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut app, release);
        assert_eq!(app.controller().cursor(), 0);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::F(1)));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::PageDown));
        assert_eq!(app.controller().cursor(), 0);
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
